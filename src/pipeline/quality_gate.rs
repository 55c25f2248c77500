//! The validity filter ("quality gate") between the raw dataset and the
//! canonical wine set.
//!
//! Malformed records are handled by omission: a record that fails any clause
//! is silently dropped, never surfaced as an error. The output preserves the
//! input order with no duplication.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Wine, WineRecord};
use crate::pipeline::normalize::{is_canonical_region, normalize_region};

/// Placeholder strings the list template leaves behind in the name column.
const NAME_SENTINELS: [&str; 3] = ["WINE NAME", "WINE PRICE", "VINTAGE"];

/// Placeholder producer left by the list template.
const PRODUCER_SENTINEL: &str = "UNKNOWN PRODUCER";

/// Type strings that mark non-wine menu rows mixed into the dataset.
const EXCLUDED_TYPE_MARKERS: [&str; 2] = ["SANGRIA", "COCKTAIL"];

/// Why a raw record was rejected by the quality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    MissingName,
    PlaceholderName,
    MissingProducer,
    PlaceholderProducer,
    NoUsablePrice,
    UnknownRegion,
    ExcludedType,
}

/// A price field counts only when present, non-empty and not the literal "0".
fn has_usable_price(price: &Option<String>) -> bool {
    match price {
        Some(p) => {
            let p = p.trim();
            !p.is_empty() && p != "0"
        }
        None => false,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Checks a single raw record against every validity clause.
///
/// Returns the admitted [`Wine`] (with its region normalized to canonical
/// form) or the first clause it failed.
pub fn assess(record: &WineRecord) -> Result<Wine, RejectReason> {
    let name = non_empty(&record.name).ok_or(RejectReason::MissingName)?;
    if NAME_SENTINELS.contains(&name.to_uppercase().as_str()) {
        return Err(RejectReason::PlaceholderName);
    }

    let producer = non_empty(&record.producer).ok_or(RejectReason::MissingProducer)?;
    if producer.to_uppercase() == PRODUCER_SENTINEL {
        return Err(RejectReason::PlaceholderProducer);
    }

    // The three price variants are independently eligible.
    if !has_usable_price(&record.price)
        && !has_usable_price(&record.bottle_price)
        && !has_usable_price(&record.glass_price)
    {
        return Err(RejectReason::NoUsablePrice);
    }

    let raw_region = non_empty(&record.region).ok_or(RejectReason::UnknownRegion)?;
    let region = normalize_region(raw_region);
    if !is_canonical_region(&region) {
        return Err(RejectReason::UnknownRegion);
    }

    if let Some(wine_type) = non_empty(&record.wine_type) {
        let upper = wine_type.to_uppercase();
        if EXCLUDED_TYPE_MARKERS.iter().any(|m| upper.contains(m)) {
            return Err(RejectReason::ExcludedType);
        }
    }

    Ok(Wine {
        wine_number: record.wine_number.clone(),
        name: name.to_string(),
        producer: producer.to_string(),
        wine_type: record.wine_type.clone(),
        region,
        vintage: record.vintage.clone(),
        price: record.price.clone(),
        bottle_price: record.bottle_price.clone(),
        glass_price: record.glass_price.clone(),
        varietals: record.varietals.clone(),
        description: record.description.clone(),
        alcohol: record.alcohol.clone(),
        aging: record.aging.clone(),
        soil: record.soil.clone(),
        elevation: record.elevation.clone(),
        organic: record.organic.clone(),
        tasting_notes: record.tasting_notes.clone(),
    })
}

/// Filters raw records down to the ordered subsequence of valid wines.
pub fn filter_valid(records: &[WineRecord]) -> Vec<Wine> {
    let mut wines = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match assess(record) {
            Ok(wine) => wines.push(wine),
            Err(reason) => {
                debug!(
                    index,
                    name = record.name.as_deref().unwrap_or("<missing>"),
                    ?reason,
                    "Dropping invalid wine record"
                );
            }
        }
    }
    wines
}
