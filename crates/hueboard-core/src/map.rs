//! The shared label color map: slice membership, overrides, lifecycle.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use hueboard_palette::{AnalogousColors, SchemeRegistry};
use serde::{Deserialize, Serialize};

use crate::assign::{assign_scheme_colors, UpdateOptions};
use crate::outcome::{MutationOutcome, UpdateOutcome};

/// A categorical data value needing a consistent display color.
pub type Label = String;

/// Opaque color value (hex or named). Compared for equality, never
/// interpreted here.
pub type Color = String;

/// Identifies one visualization slice on the dashboard.
pub type SliceId = u64;

/// Which host context currently owns mutation rights over the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum ColorMapSource {
    Dashboard,
    Explore,
}

/// Labels registered by one slice, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceLabels {
    pub id: SliceId,
    pub labels: Vec<Label>,
}

/// Authoritative label→color mapping for one dashboard rendering session.
///
/// Construct one per session, with the scheme registry and analogous
/// generator it should consult, and hand it to whoever owns the
/// dashboard; there is no global instance. Mutations are accepted only
/// while `source` is [`ColorMapSource::Dashboard`]. The host assigns the
/// field directly on navigation transitions; it is a mode flag rather
/// than guarded state.
///
/// All operations are synchronous and run to completion; callers
/// serialize their own multi-step sequences (several `add_slice` calls
/// followed by one `update_color_map`).
pub struct LabelColorMap {
    registry: Arc<dyn SchemeRegistry>,
    analogous: Arc<dyn AnalogousColors>,
    slices: Vec<SliceLabels>,
    overrides: BTreeMap<Label, Color>,
    color_map: BTreeMap<Label, Color>,
    pub source: ColorMapSource,
}

impl LabelColorMap {
    /// Create an empty map for a new dashboard session.
    pub fn new(registry: Arc<dyn SchemeRegistry>, analogous: Arc<dyn AnalogousColors>) -> Self {
        Self {
            registry,
            analogous,
            slices: Vec::new(),
            overrides: BTreeMap::new(),
            color_map: BTreeMap::new(),
            source: ColorMapSource::Dashboard,
        }
    }

    /// Register `label` under `slice_id` and pin it to `color`.
    ///
    /// Membership is idempotent; the color is an upsert (last writer
    /// wins) and lands in the color map immediately. The pinned color
    /// survives later `update_color_map` calls until the label leaves
    /// the dashboard or the map is cleared.
    pub fn add_slice(&mut self, label: &str, color: &str, slice_id: SliceId) -> MutationOutcome {
        if self.source != ColorMapSource::Dashboard {
            return MutationOutcome::ReadOnly;
        }

        let slice = match self.slices.iter().position(|slice| slice.id == slice_id) {
            Some(position) => &mut self.slices[position],
            None => {
                self.slices.push(SliceLabels {
                    id: slice_id,
                    labels: Vec::new(),
                });
                let end = self.slices.len() - 1;
                &mut self.slices[end]
            }
        };
        if !slice.labels.iter().any(|known| known == label) {
            slice.labels.push(label.to_string());
        }

        self.overrides.insert(label.to_string(), color.to_string());
        self.color_map.insert(label.to_string(), color.to_string());
        MutationOutcome::Applied
    }

    /// Drop `slice_id` and every label nothing else references.
    ///
    /// Labels still shown by another slice keep their current color.
    pub fn remove_slice(&mut self, slice_id: SliceId) -> MutationOutcome {
        if self.source != ColorMapSource::Dashboard {
            return MutationOutcome::ReadOnly;
        }
        let Some(position) = self.slices.iter().position(|slice| slice.id == slice_id) else {
            return MutationOutcome::MissingSlice;
        };

        let removed = self.slices.remove(position);
        for label in removed.labels {
            let referenced = self
                .slices
                .iter()
                .any(|slice| slice.labels.iter().any(|known| *known == label));
            if !referenced {
                self.overrides.remove(&label);
                self.color_map.remove(&label);
            }
        }
        MutationOutcome::Applied
    }

    /// Full reset of slices, overrides, and colors. Always permitted:
    /// housekeeping, not a content mutation. `source` is untouched.
    pub fn clear(&mut self) {
        self.slices.clear();
        self.overrides.clear();
        self.color_map.clear();
    }

    /// Recompute the color map for every label across all slices from the
    /// named scheme.
    ///
    /// Not gated on `source`: a scheme change is deliberate user intent.
    /// Labels walk the palette in first-seen order, wrapping cyclically
    /// once it runs out, or switching to analogous variants when
    /// `options.use_analogous_colors` is set. Pinned colors from
    /// `add_slice` win over the derived assignment.
    pub fn update_color_map(
        &mut self,
        namespace: &str,
        scheme_id: &str,
        options: UpdateOptions,
    ) -> UpdateOutcome {
        let labels = self.distinct_labels();
        if labels.is_empty() {
            self.color_map.clear();
            return UpdateOutcome::Updated;
        }

        let Some(scheme) = self.registry.lookup_scheme(namespace, scheme_id) else {
            return UpdateOutcome::UnknownScheme;
        };
        if scheme.is_empty() {
            return UpdateOutcome::UnknownScheme;
        }

        let mut next =
            assign_scheme_colors(&labels, &scheme.colors, options, self.analogous.as_ref());
        for (label, color) in &self.overrides {
            next.insert(label.clone(), color.clone());
        }
        self.color_map = next;
        UpdateOutcome::Updated
    }

    /// Current label→color table. Pure read, no recomputation.
    pub fn color_map(&self) -> &BTreeMap<Label, Color> {
        &self.color_map
    }

    pub fn color_of(&self, label: &str) -> Option<&str> {
        self.color_map.get(label).map(String::as_str)
    }

    /// Registered slices, in registration order.
    pub fn slices(&self) -> &[SliceLabels] {
        &self.slices
    }

    pub fn slice_labels(&self, slice_id: SliceId) -> Option<&[Label]> {
        self.slices
            .iter()
            .find(|slice| slice.id == slice_id)
            .map(|slice| slice.labels.as_slice())
    }

    pub fn contains_slice(&self, slice_id: SliceId) -> bool {
        self.slices.iter().any(|slice| slice.id == slice_id)
    }

    /// Distinct labels across all slices, in the order each was first
    /// seen. This is the assignment order used by `update_color_map`.
    pub fn distinct_labels(&self) -> Vec<Label> {
        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        for slice in &self.slices {
            for label in &slice.labels {
                if seen.insert(label.as_str()) {
                    labels.push(label.clone());
                }
            }
        }
        labels
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() && self.color_map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueboard_palette::{HslAnalogous, MemorySchemeRegistry};

    fn empty_map() -> LabelColorMap {
        LabelColorMap::new(
            Arc::new(MemorySchemeRegistry::new()),
            Arc::new(HslAnalogous),
        )
    }

    #[test]
    fn distinct_labels_keep_first_seen_order() {
        let mut map = empty_map();
        map.add_slice("b", "blue", 2);
        map.add_slice("a", "red", 2);
        map.add_slice("a", "green", 1);
        map.add_slice("c", "teal", 1);

        assert_eq!(map.distinct_labels(), vec!["b", "a", "c"]);
    }

    #[test]
    fn slices_keep_registration_order() {
        let mut map = empty_map();
        map.add_slice("x", "red", 9);
        map.add_slice("y", "blue", 3);

        let ids: Vec<SliceId> = map.slices().iter().map(|slice| slice.id).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn removing_unknown_slice_reports_missing() {
        let mut map = empty_map();
        map.add_slice("a", "red", 1);

        assert_eq!(map.remove_slice(7), MutationOutcome::MissingSlice);
        assert_eq!(map.color_of("a"), Some("red"));
    }

    #[test]
    fn empty_label_set_clears_without_lookup() {
        // The registry has no schemes at all; an empty dashboard must
        // still report an update rather than a miss.
        let mut map = empty_map();
        let outcome = map.update_color_map("", "anything", UpdateOptions::default());

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert!(map.color_map().is_empty());
    }
}
