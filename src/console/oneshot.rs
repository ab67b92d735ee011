//! Non-interactive commands: run one action against the loaded page and exit.
//!
//! Unlike the interactive page, a one-shot command has no way to `reload`,
//! so a failed on-load fetch ends it with the load notice.

use std::io::{self, Write};

use crate::controller::{ActionError, LoadOutcome, ViewController};

/// A single action taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    List { json: bool },
    Request { dataset: u64 },
    Check { dataset: u64 },
}

/// Run `command` and write its output; returns whether it succeeded.
pub async fn run<W: Write>(
    controller: &ViewController,
    loaded: &Result<LoadOutcome, ActionError>,
    command: OneShot,
    out: &mut W,
) -> io::Result<bool> {
    if let Err(e) = loaded {
        writeln!(out, "{}", e)?;
        return Ok(false);
    }

    match command {
        OneShot::List { json } => {
            let state = controller.state();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&state.datasets)?)?;
            } else {
                for dataset in &state.datasets {
                    writeln!(out, "[{}] {}", dataset.id, dataset.label(controller.currency()))?;
                }
            }
            Ok(true)
        }
        OneShot::Request { dataset } => {
            if !select(controller, dataset, out)? {
                return Ok(false);
            }
            match controller.request_access().await {
                Ok(tx_hash) => {
                    writeln!(out, "Access granted! Your access token is: {}", tx_hash)?;
                    Ok(true)
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    Ok(false)
                }
            }
        }
        OneShot::Check { dataset } => {
            if !select(controller, dataset, out)? {
                return Ok(false);
            }
            match controller.check_access().await {
                Ok(status) => {
                    writeln!(out, "Access Status: {}", status)?;
                    Ok(true)
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    Ok(false)
                }
            }
        }
    }
}

fn select<W: Write>(controller: &ViewController, dataset: u64, out: &mut W) -> io::Result<bool> {
    if controller.select_dataset(Some(dataset)).is_none() {
        writeln!(out, "No dataset with id {}.", dataset)?;
        return Ok(false);
    }
    Ok(true)
}
