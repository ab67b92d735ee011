//! Interactive page session.
//!
//! Reads one command per line, runs it against the controller, prints the
//! resulting notice and redraws the page. Ends on `quit`, end of input, or
//! the shutdown signal.

use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::console::command::{Command, HELP};
use crate::controller::{LoadOutcome, ViewController};
use crate::lifecycle::shutdown::ShutdownSignal;

/// A user session bound to one controller.
pub struct Session {
    controller: Arc<ViewController>,
}

impl Session {
    pub fn new(controller: Arc<ViewController>) -> Self {
        Self { controller }
    }

    /// Drive the session until quit, EOF or shutdown.
    pub async fn run<R, W>(
        &self,
        input: R,
        mut output: W,
        mut shutdown: ShutdownSignal,
    ) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        self.write_page(&mut output).await?;

        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = shutdown.recv() => {
                    tracing::info!("Session interrupted");
                    break;
                }
            };
            let Some(line) = line else {
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    output.write_all(format!("{}\n", e).as_bytes()).await?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            if let Some(notice) = self.execute(command).await {
                output.write_all(format!("{}\n", notice).as_bytes()).await?;
            }
            if command.rerenders() {
                self.write_page(&mut output).await?;
            }
        }

        output.flush().await?;
        tracing::debug!("Session ended");
        Ok(())
    }

    /// Run one command; returns the notice to show, if any.
    pub async fn execute(&self, command: Command) -> Option<String> {
        let controller = &self.controller;
        match command {
            Command::Select(id) => match (id, controller.select_dataset(id)) {
                (Some(id), None) => Some(format!("No dataset with id {}.", id)),
                _ => None,
            },
            Command::Request => match controller.request_access().await {
                Ok(tx_hash) => Some(format!("Access granted! Your access token is: {}", tx_hash)),
                Err(e) => Some(e.to_string()),
            },
            Command::Check => controller.check_access().await.err().map(|e| e.to_string()),
            Command::Reload => match controller.load_datasets().await {
                Ok(LoadOutcome::Applied(count)) => Some(format!("Loaded {} datasets.", count)),
                Ok(LoadOutcome::Superseded) => None,
                Err(e) => Some(e.to_string()),
            },
            Command::Connect => match controller.connect_wallet().await {
                Ok(Some(account)) => Some(format!("Connected {}.", account)),
                Ok(None) => Some("Wallet returned no accounts.".to_string()),
                Err(e) => Some(e.to_string()),
            },
            Command::Help => Some(HELP.to_string()),
            Command::Show | Command::Quit => None,
        }
    }

    async fn write_page<W>(&self, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        output.write_all(b"\n").await?;
        output.write_all(self.controller.render().as_bytes()).await?;
        output.write_all(b"\n").await
    }
}
