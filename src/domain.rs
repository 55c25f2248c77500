use serde::{Deserialize, Serialize};
use std::fmt;

/// A wine record exactly as it appears in the source JSON document.
///
/// Nothing here is trustworthy: the upstream list is maintained by hand and
/// contains placeholder rows, zeroed prices and misspelled regions. Every
/// field is optional until the record passes the quality gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WineRecord {
    /// List identifier ("wine number") printed on the physical menu.
    #[serde(alias = "wineNumber")]
    pub wine_number: Option<String>,
    pub name: Option<String>,
    pub producer: Option<String>,
    /// Free-text style string, e.g. "ROSSO SUPERIORE" or "BOLLICINE METODO CLASSICO".
    #[serde(rename = "type", alias = "wineType")]
    pub wine_type: Option<String>,
    pub region: Option<String>,
    /// Free text, may embed a year ("Vintage 2018 Reserve", "NV").
    pub vintage: Option<String>,
    pub price: Option<String>,
    #[serde(alias = "bottlePrice")]
    pub bottle_price: Option<String>,
    #[serde(alias = "glassPrice")]
    pub glass_price: Option<String>,
    pub varietals: Option<String>,
    pub description: Option<String>,

    // Optional enrichment fields, passed through untouched.
    pub alcohol: Option<String>,
    pub aging: Option<String>,
    pub soil: Option<String>,
    pub elevation: Option<String>,
    pub organic: Option<String>,
    #[serde(alias = "tastingNotes")]
    pub tasting_notes: Option<String>,
}

/// A wine record that has passed every validity check.
///
/// `region` holds the canonical spelling; the raw spelling is not retained.
/// The family is derived on demand from `wine_type` so there is a single
/// classification code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wine {
    pub wine_number: Option<String>,
    pub name: String,
    pub producer: String,
    pub wine_type: Option<String>,
    /// Canonical region name, member of the closed region set.
    pub region: String,
    pub vintage: Option<String>,
    pub price: Option<String>,
    pub bottle_price: Option<String>,
    pub glass_price: Option<String>,
    pub varietals: Option<String>,
    pub description: Option<String>,
    pub alcohol: Option<String>,
    pub aging: Option<String>,
    pub soil: Option<String>,
    pub elevation: Option<String>,
    pub organic: Option<String>,
    pub tasting_notes: Option<String>,
}

impl Wine {
    /// The wine's family, derived from the free-text type string.
    pub fn family(&self) -> WineFamily {
        crate::pipeline::classify::classify(self.wine_type.as_deref())
    }
}

/// The six canonical wine style categories used for navigation and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WineFamily {
    Rosso,
    Bianco,
    Rosato,
    Arancione,
    Bollicine,
    NonAlcolico,
}

impl WineFamily {
    /// All families in menu display order.
    pub const ALL: [WineFamily; 6] = [
        WineFamily::Rosso,
        WineFamily::Bianco,
        WineFamily::Rosato,
        WineFamily::Arancione,
        WineFamily::Bollicine,
        WineFamily::NonAlcolico,
    ];

    /// The uppercase label used on the printed list and in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            WineFamily::Rosso => "ROSSO",
            WineFamily::Bianco => "BIANCO",
            WineFamily::Rosato => "ROSATO",
            WineFamily::Arancione => "ARANCIONE",
            WineFamily::Bollicine => "BOLLICINE",
            WineFamily::NonAlcolico => "NON ALCOLICO",
        }
    }

    /// Parse a user-supplied family label (navigation parameter).
    pub fn from_label(label: &str) -> Option<WineFamily> {
        let upper = label.trim().to_uppercase();
        WineFamily::ALL.into_iter().find(|f| f.label() == upper)
    }
}

impl fmt::Display for WineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The filter criteria currently applied to the wine set.
///
/// Criteria combine with logical AND; an unset criterion matches everything.
/// This is an ephemeral value threaded through query calls, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub family: Option<WineFamily>,
    /// Region name; normalized before comparison so raw spellings work too.
    pub region: Option<String>,
    /// Case-insensitive substring matched against name, region and varietals.
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn family(family: WineFamily) -> Self {
        Self {
            family: Some(family),
            ..Self::default()
        }
    }

    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_labels_round_trip() {
        for family in WineFamily::ALL {
            assert_eq!(WineFamily::from_label(family.label()), Some(family));
        }
    }

    #[test]
    fn test_family_from_label_is_case_insensitive() {
        assert_eq!(WineFamily::from_label("bollicine"), Some(WineFamily::Bollicine));
        assert_eq!(WineFamily::from_label(" non alcolico "), Some(WineFamily::NonAlcolico));
        assert_eq!(WineFamily::from_label("frizzante"), None);
    }

    #[test]
    fn test_wine_record_deserializes_sparse_json() {
        let record: WineRecord =
            serde_json::from_str(r#"{"name":"Barolo Riserva","type":"ROSSO"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Barolo Riserva"));
        assert_eq!(record.wine_type.as_deref(), Some("ROSSO"));
        assert!(record.producer.is_none());
    }

    #[test]
    fn test_default_filter_spec_is_empty() {
        let spec = FilterSpec::default();
        assert!(spec.family.is_none() && spec.region.is_none() && spec.search.is_none());
    }
}
