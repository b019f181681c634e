//! Funding source records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog entry: an accelerator, incubator or micro-investor.
///
/// Facet fields are free strings so that one record type serves every
/// catalog domain; a domain simply leaves unused facets empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub application_status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub equity_range: Option<String>,
    #[serde(default)]
    pub funding_range: Option<String>,
    #[serde(default)]
    pub duration_range: Option<String>,
    #[serde(default)]
    pub stage: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub ticket_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
}

impl FundingSource {
    /// Values this record carries for a schema category.
    ///
    /// Unknown categories (including `search`) yield nothing.
    pub fn facet_values(&self, category: &str) -> Vec<&str> {
        match category {
            "affiliation" => self.affiliation.as_deref().into_iter().collect(),
            "applicationStatus" => self.application_status.as_deref().into_iter().collect(),
            "tags" => self.tags.iter().map(String::as_str).collect(),
            "equityRange" => self.equity_range.as_deref().into_iter().collect(),
            "fundingRange" => self.funding_range.as_deref().into_iter().collect(),
            "durationRange" => self.duration_range.as_deref().into_iter().collect(),
            "stage" => self.stage.iter().map(String::as_str).collect(),
            "sectors" => self.sectors.iter().map(String::as_str).collect(),
            "ticketSize" => self.ticket_size.as_deref().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Case-insensitive substring match over name, description and tags.
    pub fn matches_text(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .chain(&self.sectors)
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FundingSource {
        serde_json::from_str(
            r#"{
                "id": "acc-1",
                "name": "Launchpad Labs",
                "description": "Twelve-week fintech program",
                "affiliation": "Private",
                "tags": ["Equity", "Mentorship"],
                "applicationDeadline": "2026-11-30"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn facet_values_map_category_names() {
        let source = record();
        assert_eq!(source.facet_values("affiliation"), ["Private"]);
        assert_eq!(source.facet_values("tags"), ["Equity", "Mentorship"]);
        assert!(source.facet_values("fundingRange").is_empty());
        assert!(source.facet_values("search").is_empty());
        assert_eq!(
            source.application_deadline,
            NaiveDate::from_ymd_opt(2026, 11, 30)
        );
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let source = record();
        assert!(source.matches_text("FINTECH"));
        assert!(source.matches_text("mentor"));
        assert!(source.matches_text("  "));
        assert!(!source.matches_text("biotech"));
    }
}
