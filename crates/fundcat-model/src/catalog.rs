//! Catalog domain presets.
//!
//! The three catalogs share one filter engine; what differs between them is
//! captured here as configuration: schema, labels, options and API path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::schema::{Category, CategorySchema};

const AFFILIATIONS: [&str; 4] = ["Govt-backed", "Private", "University", "Corporate"];
const APPLICATION_STATUSES: [&str; 4] = ["Open", "Closing Soon", "Rolling", "Closed"];
const FUNDING_RANGES: [&str; 4] = ["Under $50K", "$50K-$250K", "$250K-$1M", "$1M+"];
const DURATION_RANGES: [&str; 4] = ["Under 3 months", "3-6 months", "6-12 months", "12+ months"];

/// The catalogs offered by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Accelerators,
    Incubators,
    MicroInvestors,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Accelerators,
        CatalogKind::Incubators,
        CatalogKind::MicroInvestors,
    ];

    /// URL slug and CLI name.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Accelerators => "accelerators",
            Self::Incubators => "incubators",
            Self::MicroInvestors => "micro-investors",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Accelerators => "Accelerators",
            Self::Incubators => "Incubators",
            Self::MicroInvestors => "Micro-investors",
        }
    }

    /// Build the domain configuration for this catalog.
    pub fn domain(self) -> Result<CatalogDomain> {
        CatalogDomain::new(self)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CatalogKind {
    type Err = ModelError;

    /// Accepts the slug, ignoring case and `_`/`-` differences.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "accelerators" | "accelerator" => Ok(Self::Accelerators),
            "incubators" | "incubator" => Ok(Self::Incubators),
            "micro-investors" | "micro-investor" | "microinvestors" => Ok(Self::MicroInvestors),
            _ => Err(ModelError::UnknownDomain {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration of one catalog domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogDomain {
    pub kind: CatalogKind,
    /// Path of the catalog view in the web app, e.g. `/accelerators`.
    pub path: String,
    /// Path segment of the listing endpoint on the catalog API.
    pub api_path: String,
    pub schema: CategorySchema,
}

impl CatalogDomain {
    pub fn new(kind: CatalogKind) -> Result<Self> {
        let schema = CategorySchema::new(categories_for(kind))?;
        Ok(Self {
            kind,
            path: format!("/{}", kind.slug()),
            api_path: kind.slug().to_string(),
            schema,
        })
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

fn categories_for(kind: CatalogKind) -> Vec<Category> {
    match kind {
        CatalogKind::Accelerators => vec![
            Category::multi_select("affiliation", "Affiliation", AFFILIATIONS),
            Category::multi_select("applicationStatus", "Status", APPLICATION_STATUSES),
            Category::multi_select(
                "tags",
                "Tag",
                ["Equity", "Grant", "Mentorship", "Co-working", "Demo Day"],
            ),
            Category::multi_select("equityRange", "Equity", ["0%", "1-5%", "6-10%", "10%+"]),
            Category::multi_select("fundingRange", "Funding", FUNDING_RANGES),
            Category::multi_select("durationRange", "Duration", DURATION_RANGES),
            Category::search(),
        ],
        CatalogKind::Incubators => vec![
            Category::multi_select("affiliation", "Affiliation", AFFILIATIONS),
            Category::multi_select("applicationStatus", "Status", APPLICATION_STATUSES),
            Category::multi_select(
                "tags",
                "Tag",
                ["Grant", "Lab Access", "Mentorship", "Co-working", "Legal Support"],
            ),
            Category::multi_select("fundingRange", "Funding", FUNDING_RANGES),
            Category::multi_select("durationRange", "Duration", DURATION_RANGES),
            Category::search(),
        ],
        CatalogKind::MicroInvestors => vec![
            Category::multi_select("stage", "Stage", ["Pre-seed", "Seed", "Series A"]),
            Category::multi_select(
                "sectors",
                "Sector",
                ["Fintech", "Healthtech", "Climate", "SaaS", "Consumer", "Deeptech"],
            ),
            Category::multi_select(
                "ticketSize",
                "Ticket",
                ["Under $25K", "$25K-$100K", "$100K-$500K"],
            ),
            Category::multi_select("applicationStatus", "Status", APPLICATION_STATUSES),
            Category::search(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds() {
        for kind in CatalogKind::ALL {
            let domain = kind.domain().unwrap();
            assert!(domain.schema.require("search").unwrap().is_search(), "{kind}");
            assert_eq!(domain.path, format!("/{}", kind.slug()));
        }
    }

    #[test]
    fn accelerator_schema_order() {
        let domain = CatalogKind::Accelerators.domain().unwrap();
        let names: Vec<_> = domain.schema.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "affiliation",
                "applicationStatus",
                "tags",
                "equityRange",
                "fundingRange",
                "durationRange",
                "search"
            ]
        );
    }

    #[test]
    fn parses_slugs_leniently() {
        assert_eq!(
            "Micro_Investors".parse::<CatalogKind>().unwrap(),
            CatalogKind::MicroInvestors
        );
        assert_eq!(
            "incubator".parse::<CatalogKind>().unwrap(),
            CatalogKind::Incubators
        );
        assert!("banks".parse::<CatalogKind>().is_err());
    }
}
