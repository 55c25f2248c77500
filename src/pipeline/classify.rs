//! Wine family classification.
//!
//! The dataset's `type` field is free text. Classification is an ordered
//! substring scan over the uppercased input: the first matching rule wins,
//! and anything unmatched falls back to ROSSO. The order is part of the
//! contract; reordering rules changes results for mixed style strings.

use crate::domain::{Wine, WineFamily};

/// Substring rules in priority order. First match wins.
const FAMILY_RULES: [(&[&str], WineFamily); 6] = [
    (&["BOLLICINE"], WineFamily::Bollicine),
    (&["NON ALCOLICO", "NON-ALCOHOLIC", "0.0"], WineFamily::NonAlcolico),
    (&["ROSATO"], WineFamily::Rosato),
    (&["ARANCIONE"], WineFamily::Arancione),
    (&["BIANCO"], WineFamily::Bianco),
    (
        &["ROSSO", "AMARONE", "BAROLO", "SUPERTUSCAN", "SUPERIORE", "RIPASSO"],
        WineFamily::Rosso,
    ),
];

/// Classifies a free-text wine type into its family.
///
/// Total function: absent or empty input yields the documented default,
/// [`WineFamily::Rosso`].
pub fn classify(raw_type: Option<&str>) -> WineFamily {
    let Some(raw) = raw_type else {
        return WineFamily::Rosso;
    };
    if raw.trim().is_empty() {
        return WineFamily::Rosso;
    }

    let upper = raw.to_uppercase();
    for (needles, family) in FAMILY_RULES {
        if needles.iter().any(|needle| upper.contains(needle)) {
            return family;
        }
    }

    WineFamily::Rosso
}

/// The single predicate used for all family-based filtering.
pub fn family_matches(wine: &Wine, target: WineFamily) -> bool {
    classify(wine.wine_type.as_deref()) == target
}
