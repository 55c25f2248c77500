//! Region name normalization.
//!
//! The source list spells the same region several ways ("FRIULI",
//! "FRIULI VENEZIA GIULIA") and tacks sub-appellations onto others
//! ("TOSCANA (BOLGHERI)"). Every place two region strings are compared must
//! go through [`normalize_region`] first; comparing raw spellings directly
//! is a correctness bug.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The closed set of canonical region names a valid wine may carry.
pub const CANONICAL_REGIONS: [&str; 23] = [
    "ABRUZZO",
    "ALTO ADIGE",
    "BASILICATA",
    "CALABRIA",
    "CAMPANIA",
    "EMILIA-ROMAGNA",
    "FRANCIA",
    "FRIULI-VENEZIA GIULIA",
    "LAZIO",
    "LIGURIA",
    "LOMBARDIA",
    "MARCHE",
    "MOLISE",
    "PIEMONTE",
    "PUGLIA",
    "SARDEGNA",
    "SICILIA",
    "SLOVENIA",
    "TOSCANA",
    "TRENTINO",
    "UMBRIA",
    "VALLE D'AOSTA",
    "VENETO",
];

/// Many-to-one map from raw spellings seen in the dataset to canonical names.
/// Canonical names themselves are deliberately absent: they normalize to
/// themselves via pass-through, which keeps the function idempotent.
static REGION_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Friuli variants
        ("FRIULI", "FRIULI-VENEZIA GIULIA"),
        ("FRIULI VENEZIA GIULIA", "FRIULI-VENEZIA GIULIA"),
        // Parenthetical sub-appellations
        ("TOSCANA (BOLGHERI)", "TOSCANA"),
        ("TOSCANA (MONTALCINO)", "TOSCANA"),
        ("TOSCANA (CHIANTI CLASSICO)", "TOSCANA"),
        ("PIEMONTE (LANGHE)", "PIEMONTE"),
        ("PIEMONTE (BAROLO)", "PIEMONTE"),
        ("VENETO (VALPOLICELLA)", "VENETO"),
        ("SICILIA (ETNA)", "SICILIA"),
        ("ALTO ADIGE (SUDTIROL)", "ALTO ADIGE"),
        // Trentino-Alto Adige is listed under its halves
        ("SUDTIROL", "ALTO ADIGE"),
        ("SÜDTIROL", "ALTO ADIGE"),
        ("TRENTINO-ALTO ADIGE", "TRENTINO"),
        ("TRENTINO ALTO ADIGE", "TRENTINO"),
        // Hyphenation and punctuation drift
        ("EMILIA ROMAGNA", "EMILIA-ROMAGNA"),
        ("VALLE D\u{2019}AOSTA", "VALLE D'AOSTA"),
        ("VALLE DAOSTA", "VALLE D'AOSTA"),
        // English spellings
        ("TUSCANY", "TOSCANA"),
        ("PIEDMONT", "PIEMONTE"),
        ("SICILY", "SICILIA"),
        ("SARDINIA", "SARDEGNA"),
        ("LOMBARDY", "LOMBARDIA"),
        ("FRANCE", "FRANCIA"),
    ])
});

/// Maps a raw region string to its canonical name.
///
/// Unknown spellings pass through unchanged: an unmapped region is an
/// extensibility case, not an error. Whether it is *valid* is the quality
/// gate's call, via [`is_canonical_region`].
pub fn normalize_region(raw: &str) -> String {
    let trimmed = raw.trim();
    let upper = trimmed.to_uppercase();
    if let Some(canonical) = REGION_SYNONYMS.get(upper.as_str()) {
        return (*canonical).to_string();
    }
    // Case drift on an otherwise canonical spelling still lands in the set.
    if is_canonical_region(&upper) {
        return upper;
    }
    trimmed.to_string()
}

/// Whether `region` (already normalized) is a member of the closed region set.
pub fn is_canonical_region(region: &str) -> bool {
    CANONICAL_REGIONS.contains(&region)
}

/// The distinct canonical regions present in `regions`, sorted ascending.
/// This is the de-duplicated region list shown in navigation.
pub fn distinct_canonical_regions<'a, I>(regions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    regions
        .into_iter()
        .map(normalize_region)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}
