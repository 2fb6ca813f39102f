//! hueboard-palette: categorical schemes, scheme lookup, and analogous colors.
//!
//! Colors travel through hueboard as opaque strings (hex or named); the
//! color math in [`color`] only runs when a palette runs short and
//! analogous variants have to be generated.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod analogous;
pub mod color;
pub mod scheme;

pub use analogous::*;
pub use color::*;
pub use scheme::*;
