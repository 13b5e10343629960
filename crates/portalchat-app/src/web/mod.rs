// JSON web frontend
pub mod protocol;
pub mod routes;
pub mod server;
pub mod session_manager;

pub use protocol::{ProfileInfo, SessionDetails, SessionInfo};
pub use server::{WebServer, WebServerConfig};
pub use session_manager::{SessionId, SessionManager, WebSession};
