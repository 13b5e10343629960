use colored::Colorize;
use serde::Serialize;

use crate::{mask_api_key, safe_truncate};

const MAX_BODY_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request<T: Serialize>(url: &str, request: &T, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!(
            "{}: {}",
            "Host".bright_yellow(),
            parsed_url.host_str().unwrap_or("unknown")
        );
        println!(
            "{}: {}",
            "Port".bright_yellow(),
            parsed_url
                .port()
                .map(|p| p.to_string())
                .unwrap_or_else(|| default_port_label(parsed_url.scheme()))
        );
        println!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  Authorization: Bearer {}", mask_api_key(api_key));

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => print_body(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response status and body (console output)
pub fn log_response(status: u16, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_magenta());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_magenta().bold());
    println!("{}", "═".repeat(80).bright_magenta());

    let status_line = format!("{}", status);
    if (200..300).contains(&status) {
        println!("{}: {}", "Status".bright_yellow(), status_line.green());
    } else {
        println!("{}: {}", "Status".bright_yellow(), status_line.red());
    }

    println!("\n{}", "Response Body:".bright_yellow());
    match serde_json::from_str::<serde_json::Value>(body)
        .and_then(|v| serde_json::to_string_pretty(&v))
    {
        Ok(json) => print_body(&json),
        Err(_) => print_body(body),
    }

    println!("{}", "═".repeat(80).bright_magenta());
    println!();
}

fn print_body(body: &str) {
    // Truncate very long bodies for readability
    if body.chars().count() > MAX_BODY_CHARS {
        println!("{}", safe_truncate(body, MAX_BODY_CHARS));
        println!(
            "\n{}",
            format!("... (truncated, total {} bytes)", body.len()).bright_black()
        );
    } else {
        println!("{}", body);
    }
}

fn default_port_label(scheme: &str) -> String {
    if scheme == "https" {
        "443 (default)".to_string()
    } else {
        "80 (default)".to_string()
    }
}
