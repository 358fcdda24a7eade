//! Terminal rendering of display states and the credential editor.
//!
//! Text output lays the profile out line by line. JSON output serialises the
//! same state, so scripts see exactly what a person would.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::{CredentialEditor, ProfileView, ViewState, Visibility, search_hint};

/// Number of cells in the text gauge bar.
pub const GAUGE_CELLS: usize = 20;

/// Output encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON document per render.
    Json,
}

/// Draw a score in `[0, 1]` as a fixed-width bar.
///
/// # Examples
/// ```
/// use scorecard::inbound::render::gauge_bar;
///
/// assert_eq!(gauge_bar(0.5), "[██████████░░░░░░░░░░]");
/// ```
pub fn gauge_bar(score: f64) -> String {
    let filled = filled_cells(score);
    let mut bar = String::with_capacity(GAUGE_CELLS * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n('█', filled));
    bar.extend(std::iter::repeat_n('░', GAUGE_CELLS - filled));
    bar.push(']');
    bar
}

fn filled_cells(score: f64) -> usize {
    let clamped = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    ((clamped * GAUGE_CELLS as f64).round() as usize).min(GAUGE_CELLS)
}

/// Write one display state.
///
/// # Errors
///
/// Propagates failures from the underlying writer.
pub fn render_state(
    out: &mut impl Write,
    state: &ViewState,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, state),
        OutputFormat::Text => match state {
            ViewState::Idle => writeln!(out, "{}", search_hint("")),
            ViewState::Loading { username } => writeln!(out, "Looking up @{username}..."),
            ViewState::Error { message, .. } => writeln!(out, "Error: {message}"),
            ViewState::Results(view) => render_profile(out, view),
        },
    }
}

fn render_profile(out: &mut impl Write, view: &ProfileView) -> io::Result<()> {
    let score = &view.score;
    match view.fid {
        Some(fid) => writeln!(out, "{} ({})  fid {fid}", view.display_name, view.handle)?,
        None => writeln!(out, "{} ({})", view.display_name, view.handle)?,
    }
    writeln!(
        out,
        "Score {} {} {}",
        score.text,
        gauge_bar(score.score.value()),
        score.tier.as_str()
    )?;
    writeln!(out, "{}", score.interpretation_text)?;
    writeln!(
        out,
        "Followers {}  Following {}",
        view.followers, view.following
    )?;
    writeln!(
        out,
        "Custody {} ({})",
        view.custody_address, view.custody_address_full
    )?;
    writeln!(out, "Bio: {}", view.bio)?;
    writeln!(out, "Picture: {}", view.pfp_url)
}

#[derive(Serialize)]
struct EditorDocument<'a> {
    credential: String,
    visibility: &'static str,
    status: Option<&'a str>,
}

/// Write the credential editor: the draft under its visibility and the
/// status line, if any.
///
/// # Errors
///
/// Propagates failures from the underlying writer.
pub fn render_editor(
    out: &mut impl Write,
    editor: &CredentialEditor,
    format: OutputFormat,
) -> io::Result<()> {
    let visibility = match editor.visibility() {
        Visibility::Masked => "masked",
        Visibility::Revealed => "revealed",
    };
    let status = editor.status().map(|status| status.message());
    match format {
        OutputFormat::Json => write_json(
            out,
            &EditorDocument {
                credential: editor.draft_display(),
                visibility,
                status,
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "API key: {}", editor.draft_display())?;
            if let Some(status) = status {
                writeln!(out, "{status}")?;
            }
            Ok(())
        }
    }
}

/// Write a bare hint line (text) or `{"hint": ...}` (JSON).
///
/// # Errors
///
/// Propagates failures from the underlying writer.
pub fn render_hint(out: &mut impl Write, hint: &str, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &serde_json::json!({ "hint": hint })),
        OutputFormat::Text => writeln!(out, "{hint}"),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}
