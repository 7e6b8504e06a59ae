//! Interactive operator shell
//!
//! Line-oriented command loop over stdin. The shell owns the session
//! credential; every action command is spawned as a detached task so the
//! loop never blocks on the network. Tasks are fire-and-forget: no join, no
//! cancellation. Results surface through the shared activity log, which the
//! echoing mode renders to stdout as entries are appended.

use std::str::FromStr;

use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::common::{AdminError, Result};

use super::actions::Console;

/// Commands accepted by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the session admin secret key
    SetKey(String),
    /// Fetch license statistics
    Stats,
    /// Generate keys if the pool is below the service threshold
    AutoGenerate,
    /// Generate a fixed number of keys
    ManualGenerate(u32),
    /// Clear the activity log
    Clear,
    /// Show the command list
    Help,
    /// Leave the console
    Quit,
}

impl FromStr for Command {
    type Err = AdminError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let line = s.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "key" => {
                if rest.is_empty() {
                    Err(AdminError::Validation("usage: key <secret>".to_string()))
                } else {
                    Ok(Self::SetKey(rest.to_string()))
                }
            }
            "stats" => Ok(Self::Stats),
            "auto" => Ok(Self::AutoGenerate),
            "gen" => {
                if rest.is_empty() {
                    return Err(AdminError::Validation("usage: gen <count>".to_string()));
                }
                rest.parse::<u32>()
                    .map(Self::ManualGenerate)
                    .map_err(|_| AdminError::Validation(format!("Invalid key count: {}", rest)))
            }
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(AdminError::Validation(format!(
                "Unknown command: {}. Type 'help' for the command list",
                other
            ))),
        }
    }
}

/// Whether the command loop keeps running
enum Flow {
    Continue,
    Exit,
}

/// Interactive shell session
pub struct Shell {
    console: Console,
    admin_key: String,
}

impl Shell {
    /// Create a shell, optionally prefilling the session credential
    pub fn new(console: Console, admin_key: Option<String>) -> Self {
        Self {
            console,
            admin_key: admin_key.unwrap_or_default(),
        }
    }

    /// Run the command loop until quit, EOF, or Ctrl-C
    pub async fn run(mut self) -> Result<()> {
        self.console.log.append("License admin console started");
        self.console
            .log
            .append("Enter your admin secret key with 'key <secret>', then run 'stats' to begin");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupt received, leaving console");
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if let Flow::Exit = self.handle(command) {
                                break;
                            }
                        }
                        Err(e) => self.console.log.append(e.to_string()),
                    }
                }
            }
        }

        info!("Console session ended");
        Ok(())
    }

    /// Execute one command; action commands are spawned and not awaited
    fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::SetKey(secret) => {
                self.admin_key = secret;
                self.console
                    .log
                    .append("Admin secret key updated for this session");
            }
            Command::Stats => {
                let console = self.console.clone();
                let admin_key = self.admin_key.clone();
                tokio::spawn(async move { console.fetch_statistics(&admin_key).await });
            }
            Command::AutoGenerate => {
                let console = self.console.clone();
                let admin_key = self.admin_key.clone();
                tokio::spawn(async move { console.auto_generate(&admin_key).await });
            }
            Command::ManualGenerate(count) => {
                let console = self.console.clone();
                let admin_key = self.admin_key.clone();
                tokio::spawn(async move { console.manual_generate(&admin_key, count).await });
            }
            Command::Clear => self.console.log.clear(),
            Command::Help => self.render_help(),
            Command::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    fn render_help(&self) {
        self.console.log.append("Commands:");
        self.console
            .log
            .append("  key <secret>   set the admin secret key for this session");
        self.console.log.append("  stats          fetch license statistics");
        self.console
            .log
            .append("  auto           generate keys if the pool is low");
        self.console
            .log
            .append("  gen <count>    generate <count> keys (1-50)");
        self.console.log.append("  clear          clear the activity log");
        self.console.log.append("  help           show this list");
        self.console.log.append("  quit           leave the console");
    }
}
