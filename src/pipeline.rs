//! # Meal Ingestion Pipeline
//!
//! Drives a meal from capture to commit:
//!
//! ```text
//! Idle -> LookingUp -> Drafting -> Committing -> Idle
//! ```
//!
//! Manual entry jumps straight to Drafting with an empty draft. A failed
//! lookup returns to Idle with the error surfaced and no draft created.
//! Validation failures keep the pipeline in Drafting so the user can fix
//! the reported fields; a failed commit discards the draft.
//!
//! The pipeline rejects a new scan while it is not idle, so a barcode
//! arriving mid-lookup can never present a stale draft.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    capture::ScanSession,
    error::Error,
    lookup::NutritionClient,
    models::MealDraft,
    store::Store,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    LookingUp,
    Drafting(MealDraft),
    Committing,
}

pub struct IngestionPipeline {
    store: Arc<Store>,
    nutrition: NutritionClient,
    state: PipelineState,
}

impl IngestionPipeline {
    pub fn new(store: Arc<Store>, nutrition: NutritionClient) -> Self {
        Self {
            store,
            nutrition,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Scan path: waits for the session's single barcode, then looks it
    /// up. Ignored unless the pipeline is idle; the unused session is
    /// dropped, which releases the capture device.
    pub async fn scan(&mut self, session: ScanSession) -> Result<(), Error> {
        if self.state != PipelineState::Idle {
            warn!("scan requested while pipeline is busy, ignoring");
            return Ok(());
        }

        self.state = PipelineState::LookingUp;

        let Some(barcode) = session.code().await else {
            info!("capture session closed without a barcode");
            self.state = PipelineState::Idle;
            return Ok(());
        };

        match self.nutrition.lookup(&barcode).await {
            Ok(draft) => {
                info!("prefilled draft for {:?}", draft.name);
                self.state = PipelineState::Drafting(draft);
                Ok(())
            }
            Err(error) => {
                self.state = PipelineState::Idle;
                Err(error)
            }
        }
    }

    /// Manual path: opens an empty draft, skipping capture and lookup.
    pub fn manual_entry(&mut self) {
        if self.state != PipelineState::Idle {
            warn!("manual entry requested while pipeline is busy, ignoring");
            return;
        }

        self.state = PipelineState::Drafting(MealDraft::empty());
    }

    /// The draft under edit, if the pipeline is drafting.
    pub fn draft_mut(&mut self) -> Option<&mut MealDraft> {
        match &mut self.state {
            PipelineState::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    /// Commits the draft through the store. Validation failure keeps the
    /// draft for correction; any other failure discards it. Returns to
    /// idle only after the store's post-add refetch has settled.
    pub async fn confirm(&mut self, user_id: &str) -> Result<(), Error> {
        let draft = match &self.state {
            PipelineState::Drafting(draft) => draft.clone(),
            _ => {
                warn!("confirm requested with no draft, ignoring");
                return Ok(());
            }
        };

        self.state = PipelineState::Committing;

        match self.store.add_meal(user_id, &draft).await {
            Ok(()) => {
                self.state = PipelineState::Idle;
                Ok(())
            }
            Err(error @ Error::Validation(_)) => {
                self.state = PipelineState::Drafting(draft);
                Err(error)
            }
            Err(error) => {
                warn!("commit failed, discarding draft: {error}");
                self.state = PipelineState::Idle;
                Err(error)
            }
        }
    }

    /// Discards the draft under edit.
    pub fn cancel(&mut self) {
        if matches!(self.state, PipelineState::Drafting(_)) {
            info!("draft discarded");
            self.state = PipelineState::Idle;
        }
    }
}
