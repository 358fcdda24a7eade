//! Lookup orchestration and display-state management.
//!
//! The controller owns the single display state (idle, loading, error or
//! results) and the credential editor actions. Lookups may overlap when the
//! controller is shared; each search takes a generation number and only the
//! most recent one is allowed to update the display.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::credential::mask;
use crate::domain::ports::{CredentialStore, ProfileSource};
use crate::domain::{
    CredentialError, CredentialSession, ErrorCode, LookupError, ProfileView, Username,
};

const HINT_EMPTY: &str = "Enter a username to get started";
const HINT_READY: &str = "Press Enter to search";
const SAVED_MESSAGE: &str = "API key saved successfully!";

/// Hint shown under the search input.
///
/// # Examples
/// ```
/// use scorecard::domain::search_hint;
///
/// assert_eq!(search_hint(""), "Enter a username to get started");
/// assert_eq!(search_hint("dwr"), "Press Enter to search");
/// ```
pub fn search_hint(input: &str) -> &'static str {
    if input.is_empty() {
        HINT_EMPTY
    } else {
        HINT_READY
    }
}

/// The one display state shown at any time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// Nothing searched yet.
    Idle,
    /// A lookup is in flight.
    Loading {
        /// Username being looked up.
        username: String,
    },
    /// The last action failed.
    Error {
        /// Failure category.
        code: ErrorCode,
        /// User-facing message.
        message: String,
    },
    /// The last lookup succeeded.
    Results(Box<ProfileView>),
}

impl From<LookupError> for ViewState {
    fn from(error: LookupError) -> Self {
        Self::Error {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Result of submitting a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search finished and its state is now displayed.
    Completed(ViewState),
    /// A newer search started before this one finished; its result was
    /// discarded.
    Superseded,
}

/// Whether the editor shows the draft key in plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every character is replaced by a bullet.
    Masked,
    /// The draft is shown as typed.
    Revealed,
}

/// Status line of the credential editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    /// The draft was saved.
    Saved,
    /// The save failed with the given message.
    Failed(String),
}

impl EditorStatus {
    /// Message shown in the status line.
    pub fn message(&self) -> &str {
        match self {
            Self::Saved => SAVED_MESSAGE,
            Self::Failed(message) => message.as_str(),
        }
    }
}

/// Credential editor state.
///
/// Created by [`ViewController::open_credential_editor`]; the draft starts as
/// the active credential and is zeroised when the editor is closed or
/// dropped.
pub struct CredentialEditor {
    draft: Zeroizing<String>,
    visibility: Visibility,
    status: Option<EditorStatus>,
    open: bool,
}

impl CredentialEditor {
    /// Raw draft text.
    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    /// Draft as it should be displayed under the current visibility.
    pub fn draft_display(&self) -> String {
        match self.visibility {
            Visibility::Masked => mask(&self.draft),
            Visibility::Revealed => self.draft.as_str().to_owned(),
        }
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, draft: &str) {
        *self.draft = draft.to_owned();
    }

    /// Current visibility mode.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Flip between masked and revealed.
    pub fn toggle_visibility(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        };
    }

    /// Status of the last save, if any.
    pub fn status(&self) -> Option<&EditorStatus> {
        self.status.as_ref()
    }

    /// Whether the editor is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the editor, clearing the draft and status.
    pub fn close(&mut self) {
        self.draft = Zeroizing::new(String::new());
        self.status = None;
        self.open = false;
    }
}

impl fmt::Debug for CredentialEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEditor")
            .field("draft", &"<redacted>")
            .field("visibility", &self.visibility)
            .field("status", &self.status)
            .field("open", &self.open)
            .finish()
    }
}

/// Orchestrates lookups and credential edits for one user.
pub struct ViewController<S, P> {
    session: Arc<CredentialSession<S>>,
    source: Arc<P>,
    state: Mutex<ViewState>,
    generation: AtomicU64,
}

impl<S, P> ViewController<S, P>
where
    S: CredentialStore,
    P: ProfileSource,
{
    /// Create a controller in the idle state.
    pub fn new(session: Arc<CredentialSession<S>>, source: Arc<P>) -> Self {
        Self {
            session,
            source,
            state: Mutex::new(ViewState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the displayed state.
    pub fn state(&self) -> ViewState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Credential session used for lookups.
    pub fn session(&self) -> &CredentialSession<S> {
        &self.session
    }

    /// Look up `input` and display the outcome.
    ///
    /// Blank input shows a validation error without contacting the source.
    /// Otherwise the state moves to loading, exactly one fetch is made with
    /// the active credential, and the state moves to results or error unless
    /// a newer search has started in the meantime.
    pub async fn submit_search(&self, input: &str) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let username = match Username::new(input) {
            Ok(username) => username,
            Err(error) => return self.publish(generation, LookupError::from(error).into()),
        };

        if let SearchOutcome::Superseded = self.publish(
            generation,
            ViewState::Loading {
                username: username.to_string(),
            },
        ) {
            return SearchOutcome::Superseded;
        }

        let credential = self.session.current();
        let span = info_span!("lookup", lookup_id = %Uuid::new_v4(), username = %username);
        let next = async {
            match self.source.fetch_user(&username, &credential).await {
                Ok(record) => ViewState::Results(Box::new(ProfileView::from_record(&record))),
                Err(error) => {
                    warn!(kind = error.kind(), error = %error, "user lookup failed");
                    LookupError::from(error).into()
                }
            }
        }
        .instrument(span)
        .await;

        self.publish(generation, next)
    }

    /// Open the editor pre-filled with the active credential.
    pub fn open_credential_editor(&self) -> CredentialEditor {
        CredentialEditor {
            draft: Zeroizing::new(self.session.current().expose().to_owned()),
            visibility: Visibility::Masked,
            status: None,
            open: true,
        }
    }

    /// Save the editor's draft and record the outcome in its status line.
    pub fn save_credential(&self, editor: &mut CredentialEditor) -> Result<(), CredentialError> {
        let result = self.session.save(editor.draft());
        editor.status = Some(match &result {
            Ok(()) => EditorStatus::Saved,
            Err(error) => EditorStatus::Failed(error.to_string()),
        });
        result
    }

    /// Close the editor without saving.
    pub fn close_credential_editor(&self, editor: &mut CredentialEditor) {
        editor.close();
    }

    fn publish(&self, generation: u64, next: ViewState) -> SearchOutcome {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded lookup result");
            return SearchOutcome::Superseded;
        }
        *state = next.clone();
        SearchOutcome::Completed(next)
    }
}
