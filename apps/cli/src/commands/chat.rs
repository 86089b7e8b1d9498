//! Document chat: an interactive session and a one-shot question.

use crate::output::{Output, heading};
use anyhow::{Context, Result};
use artdoc_core::{ChatSession, ConversationTurn, Role, ToolKit};
use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::path::Path;

async fn load_document(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read document {}", path.display()))
}

/// Execute the ask command.
pub async fn ask(toolkit: &ToolKit, document: &Path, question: &str, out: &Output) -> Result<()> {
    let session = ChatSession::new(load_document(document).await?);

    let answer = session.ask(toolkit, question).await?;

    out.emit(&json!({ "question": question, "answer": answer }), |_| {
        println!("{}", answer);
    })
}

/// Execute the chat command.
pub async fn execute(toolkit: &ToolKit, document: &Path, out: &Output) -> Result<()> {
    let session = ChatSession::new(load_document(document).await?);

    if !out.is_json() {
        print_banner(document, session.document().len());
    }

    loop {
        if !out.is_json() {
            print!("\n{} ", ">".green().bold());
            io::stdout().flush()?;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            "/exit" | "/quit" | "/q" => break,
            "/help" | "/h" => {
                print_help();
                continue;
            }
            "/history" => {
                print_history(&session.history(), out)?;
                continue;
            }
            "/reset" => {
                match session.reset() {
                    Ok(()) => println!("Conversation history cleared."),
                    Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
                }
                continue;
            }
            _ => {}
        }

        match session.ask(toolkit, input).await {
            Ok(answer) => out.emit(&json!({ "question": input, "answer": answer }), |_| {
                println!("\n{}", answer);
            })?,
            Err(e) => eprintln!("\n{}: {}", "Error".red().bold(), e),
        }
    }

    Ok(())
}

fn print_banner(document: &Path, length: usize) {
    println!("{}", heading("ArtDoc document chat"));
    println!("{} {} ({} characters)", "Document:".dimmed(), document.display(), length);
    println!("{}", "Type /help for commands, /exit to leave.".dimmed());
}

fn print_help() {
    println!("{}", heading("Commands"));
    println!("  /history   Show the conversation so far");
    println!("  /reset     Clear the conversation, keep the document");
    println!("  /exit      Leave the chat");
}

fn print_history(history: &[ConversationTurn], out: &Output) -> Result<()> {
    out.emit(&history, |history| {
        if history.is_empty() {
            println!("No messages yet.");
        }
        for turn in *history {
            let speaker = match turn.role {
                Role::User => "you".green().bold(),
                Role::Assistant => "artdoc".cyan().bold(),
            };
            println!("{}: {}", speaker, turn.text);
        }
    })
}
