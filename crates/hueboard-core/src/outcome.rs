//! Call outcomes.
//!
//! Skipped mutations and unresolved schemes are expected conditions, not
//! errors. Callers that care inspect the returned outcome; default call
//! sites just drop it.

use serde::{Deserialize, Serialize};

/// What a mutation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum MutationOutcome {
    /// State changed, or an idempotent re-add left it as-is.
    Applied,
    /// Skipped: the map is not in dashboard mode.
    ReadOnly,
    /// Skipped: no such slice is registered.
    MissingSlice,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// What an [`update_color_map`](crate::LabelColorMap::update_color_map)
/// call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum UpdateOutcome {
    /// The color map was recomputed.
    Updated,
    /// Skipped: the scheme id did not resolve (or resolved to an empty
    /// palette). The existing color map is untouched.
    UnknownScheme,
}

impl UpdateOutcome {
    pub fn updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}
