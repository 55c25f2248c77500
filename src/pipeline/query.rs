//! The query/filter engine over the canonical wine set.
//!
//! Every listing and every count shown anywhere derives from [`query`] with
//! the appropriate partial [`FilterSpec`]. Counts are never maintained
//! separately, so they cannot drift from what the listing would show.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{FilterSpec, Wine, WineFamily};
use crate::pipeline::classify::family_matches;
use crate::pipeline::normalize::{distinct_canonical_regions, normalize_region};

/// Sentinel returned when no vintage year can be extracted.
pub const NO_YEAR: &str = "N/A";

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());

fn matches_search(wine: &Wine, needle_lower: &str) -> bool {
    // Absent varietals is an empty string here, never a wildcard.
    wine.name.to_lowercase().contains(needle_lower)
        || wine.region.to_lowercase().contains(needle_lower)
        || wine
            .varietals
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle_lower)
}

fn matches(wine: &Wine, spec: &FilterSpec) -> bool {
    if let Some(family) = spec.family {
        if !family_matches(wine, family) {
            return false;
        }
    }

    if let Some(region) = spec.region.as_deref() {
        if normalize_region(&wine.region) != normalize_region(region) {
            return false;
        }
    }

    if let Some(search) = spec.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() && !matches_search(wine, &needle) {
            return false;
        }
    }

    true
}

/// Returns the wines matching `spec`, in their original relative order.
///
/// Pure filter: the result is always a subsequence of `wines`, and the input
/// is never mutated.
pub fn query<'a>(wines: &'a [Wine], spec: &FilterSpec) -> Vec<&'a Wine> {
    wines.iter().filter(|wine| matches(wine, spec)).collect()
}

/// Distinct canonical regions present in the set with their wine counts,
/// sorted by region name ascending. Counts come from [`query`] itself.
pub fn region_counts(wines: &[Wine]) -> Vec<(String, usize)> {
    distinct_canonical_regions(wines.iter().map(|w| w.region.as_str()))
        .into_iter()
        .map(|region| {
            let count = query(wines, &FilterSpec::region(region.clone())).len();
            (region, count)
        })
        .collect()
}

/// Wine counts per family in menu display order, again via [`query`].
pub fn family_counts(wines: &[Wine]) -> Vec<(WineFamily, usize)> {
    WineFamily::ALL
        .into_iter()
        .map(|family| (family, query(wines, &FilterSpec::family(family)).len()))
        .collect()
}

/// Looks up a wine by its list number. A miss is a user-facing "not found"
/// message at the call site, never a failure.
pub fn find_by_number<'a>(wines: &'a [Wine], number: &str) -> Option<&'a Wine> {
    wines
        .iter()
        .find(|wine| wine.wine_number.as_deref() == Some(number))
}

/// Extracts the first 19xx/20xx year embedded in a vintage string, or
/// [`NO_YEAR`] when the field is absent or holds no year ("NV").
pub fn extract_year(vintage: Option<&str>) -> String {
    vintage
        .and_then(|v| YEAR_RE.find(v))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_YEAR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine(name: &str, wine_type: &str, region: &str, varietals: Option<&str>) -> Wine {
        Wine {
            wine_number: None,
            name: name.to_string(),
            producer: "Produttore".to_string(),
            wine_type: Some(wine_type.to_string()),
            region: region.to_string(),
            vintage: None,
            price: Some("40".to_string()),
            bottle_price: None,
            glass_price: None,
            varietals: varietals.map(str::to_string),
            description: None,
            alcohol: None,
            aging: None,
            soil: None,
            elevation: None,
            organic: None,
            tasting_notes: None,
        }
    }

    fn cellar() -> Vec<Wine> {
        vec![
            wine("Amarone Classico", "ROSSO AMARONE", "VENETO", Some("Corvina")),
            wine("Prosecco Brut", "BOLLICINE", "VENETO", Some("Glera")),
            wine("Etna Bianco", "BIANCO", "SICILIA", Some("Carricante")),
            wine("Franciacorta Satèn", "BOLLICINE", "LOMBARDIA", Some("Chardonnay")),
        ]
    }

    #[test]
    fn test_empty_spec_returns_everything_in_order() {
        let wines = cellar();
        let result = query(&wines, &FilterSpec::default());
        let names: Vec<&str> = result.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Amarone Classico", "Prosecco Brut", "Etna Bianco", "Franciacorta Satèn"]
        );
    }

    #[test]
    fn test_family_and_region_combine_with_and() {
        let wines = cellar();
        let spec = FilterSpec {
            family: Some(WineFamily::Bollicine),
            region: Some("VENETO".to_string()),
            search: None,
        };
        let result = query(&wines, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Prosecco Brut");
    }

    #[test]
    fn test_region_criterion_is_normalized() {
        let wines = vec![wine("Friulano", "BIANCO", "FRIULI-VENEZIA GIULIA", None)];
        let result = query(&wines, &FilterSpec::region("FRIULI"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_search_matches_name_region_and_varietals() {
        let wines = cellar();
        for (needle, expected) in [("amarone", 1), ("sicilia", 1), ("chardonnay", 1)] {
            let spec = FilterSpec {
                search: Some(needle.to_string()),
                ..FilterSpec::default()
            };
            assert_eq!(query(&wines, &spec).len(), expected, "{needle}");
        }
    }

    #[test]
    fn test_absent_varietals_never_matches_search() {
        let wines = vec![wine("Rosso di Casa", "ROSSO", "TOSCANA", None)];
        let spec = FilterSpec {
            search: Some("sangiovese".to_string()),
            ..FilterSpec::default()
        };
        assert!(query(&wines, &spec).is_empty());
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let wines = cellar();
        let spec = FilterSpec {
            search: Some("   ".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(query(&wines, &spec).len(), wines.len());
    }

    #[test]
    fn test_region_counts_agree_with_listings() {
        let wines = cellar();
        for (region, count) in region_counts(&wines) {
            assert_eq!(count, query(&wines, &FilterSpec::region(region.clone())).len(), "{region}");
        }
    }

    #[test]
    fn test_region_counts_sorted_ascending() {
        let wines = cellar();
        let regions: Vec<String> = region_counts(&wines).into_iter().map(|(r, _)| r).collect();
        let mut sorted = regions.clone();
        sorted.sort();
        assert_eq!(regions, sorted);
    }

    #[test]
    fn test_family_counts_cover_all_wines() {
        let wines = cellar();
        let total: usize = family_counts(&wines).into_iter().map(|(_, n)| n).sum();
        assert_eq!(total, wines.len());
    }

    #[test]
    fn test_find_by_number() {
        let mut wines = cellar();
        wines[2].wine_number = Some("17".to_string());
        assert_eq!(find_by_number(&wines, "17").map(|w| w.name.as_str()), Some("Etna Bianco"));
        assert!(find_by_number(&wines, "99").is_none());
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year(Some("Vintage 2018 Reserve")), "2018");
        assert_eq!(extract_year(Some("1997")), "1997");
        assert_eq!(extract_year(Some("NV")), NO_YEAR);
        assert_eq!(extract_year(None), NO_YEAR);
    }

    #[test]
    fn test_extract_year_ignores_non_vintage_numbers() {
        // 1850 is not a 19xx/20xx year; the scan keeps looking.
        assert_eq!(extract_year(Some("est. 1850, bottled 2019")), "2019");
    }
}
