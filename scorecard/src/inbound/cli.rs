//! Command-line driving adapter.
//!
//! Parses arguments with clap and drives a [`ViewController`], rendering
//! every resulting state to a writer.

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use super::render::{OutputFormat, render_editor, render_hint, render_state};
use crate::domain::ports::{CredentialStore, ProfileSource};
use crate::domain::{SearchOutcome, Username, ViewController, ViewState, search_hint};

/// `scorecard` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scorecard",
    about = "Look up a Farcaster user and show their Neynar quality score",
    version
)]
pub struct CliArgs {
    /// Render states as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// Output format selected by `--json`.
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Top-level actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up a user by username.
    Lookup {
        /// Farcaster username, without the leading `@`.
        username: Option<String>,
    },
    /// Show or replace the stored API key.
    Credential {
        #[command(subcommand)]
        action: CredentialCommand,
    },
}

/// Credential editor actions.
#[derive(Debug, Clone, Subcommand)]
pub enum CredentialCommand {
    /// Print the active API key, masked unless `--reveal` is given.
    Show {
        /// Print the key in plain text.
        #[arg(long)]
        reveal: bool,
    },
    /// Save a new API key.
    Set {
        /// The new key; surrounding whitespace is trimmed.
        value: String,
    },
}

/// How the command finished, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Results shown or credential saved.
    Success,
    /// An error state was shown or a save failed.
    Failure,
}

impl CommandStatus {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Run one command against `controller`, writing rendered output to `out`.
///
/// A lookup of a well-formed username writes the loading state before the
/// fetch starts, then the final state. JSON output writes one document per
/// state.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails; lookup and save
/// failures are rendered and reported through [`CommandStatus`].
pub async fn execute<S, P>(
    args: &CliArgs,
    controller: &ViewController<S, P>,
    out: &mut impl Write,
) -> io::Result<CommandStatus>
where
    S: CredentialStore,
    P: ProfileSource,
{
    let format = args.format();
    match &args.command {
        Command::Lookup { username } => {
            let Some(input) = username.as_deref() else {
                render_hint(out, search_hint(""), format)?;
                return Ok(CommandStatus::Failure);
            };
            if let Ok(valid) = Username::new(input) {
                let loading = ViewState::Loading {
                    username: valid.to_string(),
                };
                render_state(out, &loading, format)?;
                out.flush()?;
            }
            let state = match controller.submit_search(input).await {
                SearchOutcome::Completed(state) => state,
                SearchOutcome::Superseded => controller.state(),
            };
            render_state(out, &state, format)?;
            Ok(match state {
                ViewState::Results(_) => CommandStatus::Success,
                _ => CommandStatus::Failure,
            })
        }
        Command::Credential {
            action: CredentialCommand::Show { reveal },
        } => {
            let mut editor = controller.open_credential_editor();
            if *reveal {
                editor.toggle_visibility();
            }
            render_editor(out, &editor, format)?;
            controller.close_credential_editor(&mut editor);
            Ok(CommandStatus::Success)
        }
        Command::Credential {
            action: CredentialCommand::Set { value },
        } => {
            let mut editor = controller.open_credential_editor();
            editor.set_draft(value);
            let saved = controller.save_credential(&mut editor);
            render_editor(out, &editor, format)?;
            controller.close_credential_editor(&mut editor);
            Ok(match saved {
                Ok(()) => CommandStatus::Success,
                Err(_) => CommandStatus::Failure,
            })
        }
    }
}
