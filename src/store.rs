//! # User/Meal Store
//!
//! Authoritative in-memory snapshot of the current users and their meals.
//! The backend is the single source of truth: a successful write is always
//! followed by a full refetch rather than an optimistic local append.
//!
//! All visible state sits behind one lock and changes in a single atomic
//! replacement, so a reader never sees a half-applied fetch. A monotonic
//! sequence counter drops completions of fetches that were superseded
//! while in flight.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::{
    error::Error,
    models::{MealDraft, User},
    remote::RemoteClient,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Loaded,
    Error(String),
}

struct StoreState {
    loading: LoadingState,
    users: Vec<User>,
    fetch_seq: u64,
}

pub struct Store {
    remote: RemoteClient,
    state: Mutex<StoreState>,
}

impl Store {
    pub fn new(remote: RemoteClient) -> Arc<Self> {
        Arc::new(Self {
            remote,
            state: Mutex::new(StoreState {
                loading: LoadingState::Loading,
                users: Vec::new(),
                fetch_seq: 0,
            }),
        })
    }

    pub fn loading_state(&self) -> LoadingState {
        self.state.lock().unwrap().loading.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.lock().unwrap().users.clone()
    }

    /// Replaces the user list wholesale from the backend. On any failure
    /// the previous list is kept and only the loading state changes. A
    /// completion is dropped if a newer fetch started while it was in
    /// flight, so the visible state always reflects the latest request.
    /// Retry is caller-initiated by invoking this again.
    pub async fn fetch_users(&self) -> LoadingState {
        // The sequence bump and the Loading write share one lock
        // acquisition, so a superseded fetch can never write Loading
        // after a newer fetch has already applied its result.
        let seq = {
            let mut state = self.state.lock().unwrap();
            state.fetch_seq += 1;
            state.loading = LoadingState::Loading;
            state.fetch_seq
        };

        let outcome = self.remote.fetch_users().await;

        let mut state = self.state.lock().unwrap();
        if state.fetch_seq != seq {
            warn!("dropping stale fetch completion (seq {seq})");
            return state.loading.clone();
        }

        match outcome {
            Ok(users) => {
                info!("loaded {} users", users.len());
                state.users = users;
                state.loading = LoadingState::Loaded;
            }
            Err(error) => {
                warn!("fetch failed: {error}");
                state.loading = LoadingState::Error(error.to_string());
            }
        }

        state.loading.clone()
    }

    /// Validates the draft, POSTs it, then resynchronizes with a full
    /// refetch. Validation failure aborts before any network call. A
    /// failed POST leaves the store untouched and surfaces the error;
    /// the draft is discarded either way, with no automatic retry.
    pub async fn add_meal(&self, user_id: &str, draft: &MealDraft) -> Result<(), Error> {
        let meal = draft.validate()?;

        self.remote.add_meal(user_id, &meal).await?;
        info!("meal {:?} added for user {user_id}", meal.name);

        // Server acknowledged; re-read its view of the world. The add is
        // reported as successful even if this refetch fails.
        self.fetch_users().await;

        Ok(())
    }
}
