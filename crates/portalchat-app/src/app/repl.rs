use anyhow::Result;
use colored::Colorize;
use portalchat_llm_api::LlmClient;
use portalchat_session::SessionSettings;
use portalchat_types::{Message, Role};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::start_session;
use crate::config::{AppConfig, Profile};

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    History,
    Starters,
    /// Run one turn with this text
    Submit(String),
    /// A starter was picked; echo it, then run a turn
    Starter(String),
    Invalid(String),
}

/// Interpret one non-blank input line
pub fn parse_command(line: &str, profile: &Profile) -> ReplCommand {
    match line {
        "exit" | "quit" => return ReplCommand::Exit,
        "/help" => return ReplCommand::Help,
        "/history" => return ReplCommand::History,
        "/starters" => return ReplCommand::Starters,
        _ => {}
    }

    if let Some(rest) = line.strip_prefix('/') {
        if let Ok(n) = rest.parse::<usize>() {
            return match profile.starter(n) {
                Some(text) => ReplCommand::Starter(text.to_string()),
                None => ReplCommand::Invalid(format!(
                    "No starter #{} (this profile has {})",
                    n,
                    profile.starters.len()
                )),
            };
        }
    }

    ReplCommand::Submit(line.to_string())
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &AppConfig, client: &dyn LlmClient) -> Result<()> {
    let profile = &config.profile;
    print_header(profile, client.model());

    let settings = SessionSettings::new(client.model())
        .with_memory_length(profile.memory_length)
        .with_temperature(config.client_config.temperature);
    let mut session = start_session(profile, settings, config.log_dir.as_deref()).await;
    if session.system_prompt().is_default() {
        log::debug!("using default system instruction");
    }

    let mut rl = DefaultEditor::new()?;
    // Transcript entries already on screen
    let mut shown = 0usize;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                // Blank submissions never start a turn
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let input = match parse_command(line, profile) {
                    ReplCommand::Exit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    ReplCommand::Help => {
                        print_help();
                        continue;
                    }
                    ReplCommand::History => {
                        if session.transcript().is_empty() {
                            println!("{}", "No messages yet.".bright_black());
                        }
                        for message in session.transcript() {
                            render_message(message);
                        }
                        continue;
                    }
                    ReplCommand::Starters => {
                        print_starters(profile);
                        continue;
                    }
                    ReplCommand::Invalid(msg) => {
                        eprintln!("{} {}", "❌".bright_red(), msg);
                        continue;
                    }
                    ReplCommand::Starter(text) => {
                        println!("{} {}", "You:".bright_green().bold(), text);
                        text
                    }
                    ReplCommand::Submit(text) => text,
                };

                let spinner = format!("{} thinking...", "⏳".bright_black());
                println!("{}", spinner.bright_black());

                match session.handle_turn(client, &input).await {
                    Ok(frame) => {
                        // The user's line is already on screen; show what is new
                        for message in &frame.transcript[shown.min(frame.transcript.len())..] {
                            if message.role() != Role::User {
                                render_message(message);
                            }
                        }
                        shown = frame.transcript.len();
                    }
                    Err(e) => {
                        eprintln!("{} {}", "❌".bright_red(), e);
                        shown = session.transcript().len();
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    session.close().await;
    Ok(())
}

fn print_header(profile: &Profile, model: &str) {
    println!();
    println!("{}", profile.title.bright_cyan().bold());
    println!("{}", profile.subtitle.bright_black());
    println!("{}", "─".repeat(60).bright_black());
    print_starters(profile);
    println!(
        "{}",
        format!("Model: {} • Type 'exit' to quit, '/help' for commands", model).bright_black()
    );
    println!("{}\n", format!("🚀 {}", profile.input_placeholder).bright_black());
}

fn print_starters(profile: &Profile) {
    if profile.starters.is_empty() {
        return;
    }
    println!("{}", "💡 Start with a question:".bright_yellow());
    for (i, starter) in profile.starters.iter().enumerate() {
        println!("  {} {}", format!("/{}", i + 1).bright_magenta(), starter);
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /history   show the whole conversation");
    println!("  /starters  list the quick-start questions");
    println!("  /<n>       ask quick-start question n");
    println!("  exit       leave the chat");
}

fn render_message(message: &Message) {
    match message.role() {
        Role::User => println!("{} {}", "You:".bright_green().bold(), message.content()),
        Role::Assistant => println!(
            "{} {}\n",
            "Assistant:".bright_blue().bold(),
            message.content()
        ),
        Role::System => println!("{}", message.content().bright_black()),
    }
}
