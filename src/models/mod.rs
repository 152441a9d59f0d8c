//! Domain models for the Olympic-Games dataset
//!
//! This module contains the five entity records read from the storage
//! collaborator. No record is created or mutated by the reports; they are
//! immutable facts held by a [`crate::snapshot::Snapshot`].

pub mod country;
pub mod event;
pub mod event_result;
pub mod olympics;
pub mod player;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use country::Country;
pub use event::Event;
pub use event_result::EventResult;
pub use olympics::Olympics;
pub use player::Player;
pub use traits::{ArrowSchema, EntityModel};
pub use types::Medal;
