//! # calTrack Client Core
//!
//! Client-side model for a personal calorie/macro tracker. The backend owns
//! the durable user and meal records; this crate owns the in-memory snapshot
//! the app renders from, plus the pipeline that turns a scanned barcode into
//! a logged meal.
//!
//!
//!
//! # Data Flow
//!
//! - Capture session emits a single decoded barcode string
//! - Nutrition lookup resolves the barcode against Open Food Facts
//! - The resulting draft is presented for edit, validated, and committed
//! - Commit POSTs to the backend, then refetches the full user list
//!
//! The store never appends optimistically. The server is the single source
//! of truth, so every successful write is followed by a full re-read.
//!
//!
//!
//! # Synchronization
//!
//! All store state lives behind one lock and every visible mutation is a
//! single atomic replacement, so readers never observe a partial update.
//! Completed fetches are applied only if no newer fetch has started since.
//!
//!
//!
//! # Backend Payloads
//!
//! Fetch users.
//! ```text
//! GET {base}/users ->
//! [{_id, username, calorieGoal, carbsGoal, fatGoal, proteinGoal, meals: [..]}]
//! ```
//!
//! Log a meal.
//! ```text
//! POST {base}/addMeal
//! {"userID": "...", "meal": {"name": "...", "calories": 0, "protein": 0, "fat": 0, "carbs": 0}}
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod remote;
pub mod store;
