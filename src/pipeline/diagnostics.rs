//! Dataset health checks.
//!
//! Diagnostic only: nothing reported here changes what the quality gate
//! admits or what queries return. The checks exist to catch list-maintenance
//! slips (reused wine numbers, region typos that survived normalization)
//! before guests do.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Wine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthIssue {
    pub severity: IssueSeverity,
    pub description: String,
    /// Wine numbers or region names involved, for the report.
    pub subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueSeverity {
    Info,
    Warning,
}

/// Wine numbers assigned to more than one wine on the list.
pub fn duplicate_wine_numbers(wines: &[Wine]) -> Vec<HealthIssue> {
    let mut by_number: HashMap<&str, Vec<&str>> = HashMap::new();
    for wine in wines {
        if let Some(number) = wine.wine_number.as_deref() {
            by_number.entry(number).or_default().push(&wine.name);
        }
    }

    let mut issues: Vec<HealthIssue> = by_number
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(number, names)| HealthIssue {
            severity: IssueSeverity::Warning,
            description: format!("Wine number {} is shared by: {}", number, names.join(", ")),
            subject: number.to_string(),
        })
        .collect();
    issues.sort_by(|a, b| a.subject.cmp(&b.subject));
    issues
}

/// Region values that look like leftover placeholders or truncations.
pub fn suspicious_regions(wines: &[Wine]) -> Vec<HealthIssue> {
    let mut issues = Vec::new();
    for wine in wines {
        let upper = wine.region.to_uppercase();
        let suspicious =
            upper.contains("WINE") || upper.contains("UNKNOWN") || wine.region.len() < 3;
        if suspicious {
            issues.push(HealthIssue {
                severity: IssueSeverity::Info,
                description: format!("Region '{}' on '{}' looks suspicious", wine.region, wine.name),
                subject: wine.region.clone(),
            });
        }
    }
    issues
}

/// Runs every health check over the admitted wine set.
pub fn run_health_checks(wines: &[Wine]) -> Vec<HealthIssue> {
    let mut issues = duplicate_wine_numbers(wines);
    issues.extend(suspicious_regions(wines));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine(name: &str, number: Option<&str>, region: &str) -> Wine {
        Wine {
            wine_number: number.map(str::to_string),
            name: name.to_string(),
            producer: "Produttore".to_string(),
            wine_type: Some("ROSSO".to_string()),
            region: region.to_string(),
            vintage: None,
            price: Some("30".to_string()),
            bottle_price: None,
            glass_price: None,
            varietals: None,
            description: None,
            alcohol: None,
            aging: None,
            soil: None,
            elevation: None,
            organic: None,
            tasting_notes: None,
        }
    }

    #[test]
    fn test_duplicate_numbers_flagged() {
        let wines = vec![
            wine("Barolo", Some("7"), "PIEMONTE"),
            wine("Barbaresco", Some("7"), "PIEMONTE"),
            wine("Chianti", Some("8"), "TOSCANA"),
        ];
        let issues = duplicate_wine_numbers(&wines);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, "7");
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn test_unnumbered_wines_are_not_duplicates() {
        let wines = vec![wine("Barolo", None, "PIEMONTE"), wine("Chianti", None, "TOSCANA")];
        assert!(duplicate_wine_numbers(&wines).is_empty());
    }

    #[test]
    fn test_suspicious_regions_flagged() {
        let wines = vec![
            wine("Mystery Red", Some("1"), "UNKNOWN REGION"),
            wine("Short", Some("2"), "XX"),
            wine("Fine", Some("3"), "VENETO"),
        ];
        let issues = suspicious_regions(&wines);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_health_checks_do_not_mutate() {
        let wines = vec![wine("Barolo", Some("7"), "PIEMONTE")];
        let before = wines.len();
        let _ = run_health_checks(&wines);
        assert_eq!(wines.len(), before);
    }
}
