//! hueboard-core: the shared label color map for dashboard sessions.
//!
//! Dashboards compose many visualization slices whose legends may carry
//! the same categorical labels. One [`LabelColorMap`] per rendering
//! session keeps those labels on stable, shared colors while slices come
//! and go, and re-derives the whole mapping when the user picks a
//! different color scheme.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod assign;
pub mod map;
pub mod outcome;

pub use assign::*;
pub use map::*;
pub use outcome::*;
