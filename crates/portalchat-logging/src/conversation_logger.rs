use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 Local time
    session_id: Uuid,
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Appends every exchanged message to a JSONL file.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger for one session; the file name carries the local
    /// start time and the session id, so concurrent sessions never share a file.
    pub async fn new(log_dir: &Path, session_id: Uuid) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now_local = Local::now();
        let filename = format!(
            "pchat-{}-{}.jsonl",
            now_local.format("%Y-%m-%d-%H%M%S"),
            session_id
        );
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry. Write failures are reported, never propagated.
    pub async fn log(&mut self, session_id: Uuid, role: &str, content: &str, model: Option<&str>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            session_id,
            role,
            content,
            model,
        };
        let Some(file) = &mut self.file else {
            return;
        };
        match serde_json::to_string(&entry) {
            Ok(mut json) => {
                json.push('\n');
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else {
                    let _ = file.flush().await;
                }
            }
            Err(e) => eprintln!("[Logging error] {}", e),
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_writes_one_json_line_per_message() {
        let dir = tempfile::tempdir().unwrap();
        let session_id = Uuid::new_v4();

        let mut logger = ConversationLogger::new(&dir.path().join("logs"), session_id)
            .await
            .unwrap();
        logger.log(session_id, "user", "Hello", None).await;
        logger
            .log(session_id, "assistant", "Hi!", Some("llama-3.3-70b-versatile"))
            .await;
        let path = logger.path().to_path_buf();
        logger.shutdown().await;

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["role"], "user");
        assert_eq!(lines[0]["content"], "Hello");
        assert!(lines[0].get("model").is_none());
        assert_eq!(lines[1]["model"], "llama-3.3-70b-versatile");
        assert_eq!(lines[1]["session_id"], session_id.to_string());
    }

    #[tokio::test]
    async fn test_log_after_shutdown_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = ConversationLogger::new(dir.path(), Uuid::new_v4()).await.unwrap();
        logger.shutdown().await;
        logger.log(Uuid::new_v4(), "user", "ignored", None).await;

        let text = std::fs::read_to_string(logger.path()).unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_started_together_get_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let (one, two) = (Uuid::new_v4(), Uuid::new_v4());

        let mut first = ConversationLogger::new(dir.path(), one).await.unwrap();
        let mut second = ConversationLogger::new(dir.path(), two).await.unwrap();
        assert_ne!(first.path(), second.path());
        assert!(first.path().to_string_lossy().contains(&one.to_string()));

        first.log(one, "user", "from one", None).await;
        second.log(two, "user", "from two", None).await;
        first.shutdown().await;
        second.shutdown().await;

        let text = std::fs::read_to_string(first.path()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("from one"));
    }
}
