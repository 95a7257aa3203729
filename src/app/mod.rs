//! Application layer.
//!
//! # Structure
//!
//! - `resume` - the fixed document model
//! - `settings` / `typography` / `zoom` / `dropdowns` / `selection` - view
//!   state and its rules, kept free of widget code so they unit test cleanly
//! - `weather` / `export` - the two outward-facing operations
//! - `state.rs` - main application coordinator driven by `messages`

pub mod dropdowns;
pub mod error;
pub mod export;
pub mod messages;
pub mod resume;
pub mod selection;
pub mod settings;
pub mod state;
pub mod typography;
pub mod weather;
pub mod wordcount;
pub mod zoom;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::{AppSettings, ThemePreference};
pub use state::AppState;
