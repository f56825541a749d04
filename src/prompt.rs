//! Interactive prompt collaborator.
//!
//! The orchestrator only talks to the [`Prompter`] trait; the console
//! implementation reads stdin line by line, and tests substitute a
//! scripted implementation.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::error::Result;

/// Free-text and yes/no prompts, each with a default answer.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask a free-text question; an empty answer yields `default`.
    async fn ask(&self, question: &str, default: &str) -> Result<String>;

    /// Ask a yes/no question; an empty answer yields `default`.
    async fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

/// Console prompter reading answers from stdin.
///
/// The buffered reader is held across calls so answers piped in ahead of
/// time are not lost between prompts. On end of input, `ask` falls back
/// to the default and `confirm` declines.
pub struct ConsolePrompter {
    input: Mutex<BufReader<Stdin>>,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }

    async fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        Ok((read > 0).then(|| line.trim().to_string()))
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for ConsolePrompter {
    async fn ask(&self, question: &str, default: &str) -> Result<String> {
        print!("{question} [{default}]: ");
        std::io::stdout().flush()?;

        match self.read_line().await? {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default.to_string()),
        }
    }

    async fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            print!("{question} [{hint}]: ");
            std::io::stdout().flush()?;

            let Some(answer) = self.read_line().await? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer yes or no."),
            }
        }
    }
}
