//! Scheme application: cyclic recycling and analogous-variant overflow.

use std::collections::BTreeMap;

use hueboard_palette::AnalogousColors;
use serde::{Deserialize, Serialize};

use crate::map::{Color, Label};

/// Per-call knobs for [`update_color_map`](crate::LabelColorMap::update_color_map).
/// Read at call time, so the host can flip behavior between updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct UpdateOptions {
    /// Replace exact palette recycling with analogous variants once the
    /// scheme runs out of colors.
    pub use_analogous_colors: bool,
}

impl UpdateOptions {
    pub fn analogous() -> Self {
        Self {
            use_analogous_colors: true,
        }
    }
}

/// Assign palette colors to `labels` in order, one color per label.
///
/// The first `palette.len()` labels take the palette colors directly.
/// Past that, colors recycle cyclically. With
/// `options.use_analogous_colors` set, each wrapped label takes an
/// analogous variant of its base color instead, so no two overflow
/// labels repeat a color verbatim. An empty palette assigns nothing.
pub fn assign_scheme_colors(
    labels: &[Label],
    palette: &[Color],
    options: UpdateOptions,
    generator: &dyn AnalogousColors,
) -> BTreeMap<Label, Color> {
    let mut assigned = BTreeMap::new();
    let base_count = palette.len();
    if base_count == 0 {
        return assigned;
    }

    if !options.use_analogous_colors || labels.len() <= base_count {
        for (position, label) in labels.iter().enumerate() {
            assigned.insert(label.clone(), palette[position % base_count].clone());
        }
        return assigned;
    }

    // One generator call per base color covers every wrap of that base.
    let variants_per_base = (labels.len() - base_count).div_ceil(base_count);
    let variants: Vec<Vec<Color>> = palette
        .iter()
        .map(|base| generator.analogous(base, variants_per_base))
        .collect();

    for (position, label) in labels.iter().enumerate() {
        let base = position % base_count;
        let color = if position < base_count {
            palette[base].clone()
        } else {
            // The wrap count picks the variant; a generator that came up
            // short falls back to recycling the base.
            variants[base]
                .get(position / base_count - 1)
                .cloned()
                .unwrap_or_else(|| palette[base].clone())
        };
        assigned.insert(label.clone(), color);
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueboard_palette::HslAnalogous;
    use rstest::rstest;
    use std::collections::HashSet;

    /// Generator double handing out predictable variants.
    struct Suffixed;

    impl AnalogousColors for Suffixed {
        fn analogous(&self, base: &str, count: usize) -> Vec<String> {
            (1..=count).map(|i| format!("{}~{}", base, i)).collect()
        }
    }

    /// Generator double that never produces anything.
    struct Barren;

    impl AnalogousColors for Barren {
        fn analogous(&self, _base: &str, _count: usize) -> Vec<String> {
            Vec::new()
        }
    }

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn palette(colors: &[&str]) -> Vec<Color> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[rstest]
    #[case("a", "red")]
    #[case("c", "blue")]
    #[case("d", "red")]
    #[case("e", "green")]
    fn recycling_wraps_cyclically(#[case] label: &str, #[case] expected: &str) {
        let assigned = assign_scheme_colors(
            &labels(&["a", "b", "c", "d", "e"]),
            &palette(&["red", "green", "blue"]),
            UpdateOptions::default(),
            &Suffixed,
        );
        assert_eq!(assigned[label], expected);
    }

    #[test]
    fn no_wrap_when_palette_covers_labels() {
        let assigned = assign_scheme_colors(
            &labels(&["a", "b"]),
            &palette(&["red", "green", "blue"]),
            UpdateOptions::analogous(),
            &Suffixed,
        );
        assert_eq!(assigned["a"], "red");
        assert_eq!(assigned["b"], "green");
        assert_eq!(assigned.len(), 2);
    }

    #[test]
    fn analogous_mode_replaces_recycling() {
        let assigned = assign_scheme_colors(
            &labels(&["a", "b", "c", "d", "e", "f", "g"]),
            &palette(&["red", "green", "blue"]),
            UpdateOptions::analogous(),
            &Suffixed,
        );
        assert_eq!(assigned["d"], "red~1");
        assert_eq!(assigned["e"], "green~1");
        assert_eq!(assigned["f"], "blue~1");
        assert_eq!(assigned["g"], "red~2");
    }

    #[test]
    fn analogous_overflow_never_duplicates() {
        let many: Vec<Label> = (0..20).map(|i| format!("label-{}", i)).collect();
        let assigned = assign_scheme_colors(
            &many,
            &palette(&["#d32f2f", "#1565c0", "#2e7d32"]),
            UpdateOptions::analogous(),
            &HslAnalogous,
        );
        let distinct: HashSet<&String> = assigned.values().collect();
        assert_eq!(distinct.len(), assigned.len());
    }

    #[test]
    fn barren_generator_falls_back_to_recycling() {
        let assigned = assign_scheme_colors(
            &labels(&["a", "b", "c", "d"]),
            &palette(&["red", "green", "blue"]),
            UpdateOptions::analogous(),
            &Barren,
        );
        assert_eq!(assigned["d"], "red");
    }

    #[test]
    fn empty_palette_assigns_nothing() {
        let assigned = assign_scheme_colors(
            &labels(&["a"]),
            &[],
            UpdateOptions::default(),
            &Suffixed,
        );
        assert!(assigned.is_empty());
    }
}
