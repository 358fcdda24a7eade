//! Behaviour tests for username lookups through the view controller.

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use scorecard::domain::ports::{InMemoryCredentialStore, ProfileSource, ProfileSourceError};
use scorecard::domain::{
    Credential, CredentialSession, UserRecord, Username, ViewController, ViewState,
};
use tokio::runtime::{Builder, Runtime};

enum Script {
    Knows { username: String, score: f64 },
    ReportsMissing,
    RejectsCredential,
}

struct ScriptedSource {
    script: Script,
    calls: AtomicUsize,
}

#[async_trait]
impl ProfileSource for ScriptedSource {
    async fn fetch_user(
        &self,
        username: &Username,
        _credential: &Credential,
    ) -> Result<UserRecord, ProfileSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Knows {
                username: known,
                score,
            } if username.as_ref() == known => Ok(UserRecord {
                username: known.clone(),
                score: Some(*score),
                ..UserRecord::default()
            }),
            Script::RejectsCredential => Err(ProfileSourceError::unauthorized()),
            Script::Knows { .. } | Script::ReportsMissing => {
                Err(ProfileSourceError::not_found(username.to_string()))
            }
        }
    }
}

struct LookupWorld {
    runtime: Runtime,
    source: RefCell<Option<Arc<ScriptedSource>>>,
    state: RefCell<Option<ViewState>>,
}

impl LookupWorld {
    fn new() -> Self {
        Self {
            runtime: Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime should build"),
            source: RefCell::new(None),
            state: RefCell::new(None),
        }
    }

    fn install(&self, script: Script) {
        *self.source.borrow_mut() = Some(Arc::new(ScriptedSource {
            script,
            calls: AtomicUsize::new(0),
        }));
    }

    fn source(&self) -> Arc<ScriptedSource> {
        self.source
            .borrow()
            .clone()
            .expect("a profile source should be configured")
    }

    fn search(&self, input: &str) {
        let session = CredentialSession::load_or_initialize(
            Arc::new(InMemoryCredentialStore::default()),
            Credential::new("test-key").expect("valid key"),
        )
        .expect("session loads");
        let controller = ViewController::new(Arc::new(session), self.source());
        self.runtime.block_on(controller.submit_search(input));
        *self.state.borrow_mut() = Some(controller.state());
    }

    fn with_state<F>(&self, f: F)
    where
        F: FnOnce(&ViewState),
    {
        let state = self.state.borrow();
        f(state.as_ref().expect("a search should have run"));
    }

    fn error_message(&self) -> String {
        let mut message = None;
        self.with_state(|state| match state {
            ViewState::Error { message: text, .. } => message = Some(text.clone()),
            other => panic!("expected error state, got {other:?}"),
        });
        message.expect("error message captured")
    }
}

#[fixture]
fn world() -> LookupWorld {
    LookupWorld::new()
}

#[given("a profile source that knows \"{username}\" with score {score}")]
fn a_source_that_knows(world: &LookupWorld, username: String, score: f64) {
    world.install(Script::Knows { username, score });
}

#[given("a profile source that reports every user as missing")]
fn a_source_reporting_missing(world: &LookupWorld) {
    world.install(Script::ReportsMissing);
}

#[given("a profile source that rejects the credential")]
fn a_source_rejecting_the_credential(world: &LookupWorld) {
    world.install(Script::RejectsCredential);
}

#[when("the user searches for \"{input}\"")]
fn the_user_searches_for(world: &LookupWorld, input: String) {
    world.search(&input);
}

#[then("the results show score \"{text}\"")]
fn the_results_show_score(world: &LookupWorld, text: String) {
    world.with_state(|state| match state {
        ViewState::Results(view) => assert_eq!(view.score.text, text),
        other => panic!("expected results, got {other:?}"),
    });
}

#[then("the score tier is \"{tier}\"")]
fn the_score_tier_is(world: &LookupWorld, tier: String) {
    world.with_state(|state| match state {
        ViewState::Results(view) => assert_eq!(view.score.tier.as_str(), tier),
        other => panic!("expected results, got {other:?}"),
    });
}

#[then("the interpretation is \"{text}\"")]
fn the_interpretation_is(world: &LookupWorld, text: String) {
    world.with_state(|state| match state {
        ViewState::Results(view) => assert_eq!(view.score.interpretation_text, text),
        other => panic!("expected results, got {other:?}"),
    });
}

#[then("the error message is \"{message}\"")]
fn the_error_message_is(world: &LookupWorld, message: String) {
    assert_eq!(world.error_message(), message);
}

#[then("the error message mentions \"{username}\"")]
fn the_error_message_mentions(world: &LookupWorld, username: String) {
    let message = world.error_message();
    assert!(
        message.contains(&format!("\"{username}\"")),
        "message {message:?} should name {username}",
    );
}

#[then("the profile source was called {count} times")]
fn the_source_was_called(world: &LookupWorld, count: usize) {
    assert_eq!(world.source().calls.load(Ordering::SeqCst), count);
}

#[scenario(
    path = "tests/features/lookup.feature",
    name = "Looking up a user with a high score"
)]
fn looking_up_a_user_with_a_high_score(world: LookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lookup.feature",
    name = "Out-of-range scores are clamped"
)]
fn out_of_range_scores_are_clamped(world: LookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lookup.feature",
    name = "A blank username is rejected without a request"
)]
fn a_blank_username_is_rejected_without_a_request(world: LookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lookup.feature",
    name = "An unknown user is reported by name"
)]
fn an_unknown_user_is_reported_by_name(world: LookupWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lookup.feature",
    name = "A rejected API key is reported"
)]
fn a_rejected_api_key_is_reported(world: LookupWorld) {
    drop(world);
}
