//! # Catalog
//!
//! Record types behind each screen, and loading of the record collections.
//!
//! The sample catalog is compiled into the binary from `assets/catalog.toml`.
//! A different file with the same layout can replace it at startup.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::filter::{FacetCounts, Record, aggregate};

const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog.toml");

// ============================================================================
// Record Types
// ============================================================================

/// Curated dataset listed on the Access screen.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    pub title: String,
    pub description: String,
    pub country: String,
    pub category: String,
    pub records: u32,
    pub contributors: u32,
    #[serde(default)]
    pub verified: bool,
}

impl Record for Dataset {
    const FACETS: &'static [&'static str] = &["country", "category"];

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<&str> {
        Some(self.description.as_str())
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "country" => Some(self.country.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn meta(&self) -> Vec<String> {
        let mut meta = vec![
            format!("{} records", thousands(u64::from(self.records))),
            format!("{} contributors", self.contributors),
        ];
        if self.verified {
            meta.push("Verified".to_string());
        }
        meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Verified,
    Review,
    Pending,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Verified => "verified",
            ReviewStatus::Review => "review",
            ReviewStatus::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Verified => "Verified",
            ReviewStatus::Review => "In Review",
            ReviewStatus::Pending => "Pending",
        }
    }
}

/// Submission moving through community review (Verification screen).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub status: ReviewStatus,
    pub reviews: u32,
    #[serde(default)]
    pub expert_badge: bool,
    pub date: String,
}

impl Record for Story {
    const FACETS: &'static [&'static str] = &["status"];

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<&str> {
        Some(self.author.as_str())
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn meta(&self) -> Vec<String> {
        let mut meta = vec![self.status.label().to_string(), self.date.clone()];
        meta.push(format!("{} reviews", self.reviews));
        if self.expert_badge {
            meta.push("Expert".to_string());
        }
        meta
    }
}

/// Knowledge theme with its dataset titles (Thematic screen).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Theme {
    pub id: String,
    pub title: String,
    pub description: String,
    pub count: u32,
    #[serde(default)]
    pub datasets: Vec<String>,
}

impl Record for Theme {
    const FACETS: &'static [&'static str] = &["id"];

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<&str> {
        Some(self.description.as_str())
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn meta(&self) -> Vec<String> {
        vec![format!("{} datasets", self.count)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Frameworks,
    Policy,
    Briefs,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Frameworks,
        DocumentKind::Policy,
        DocumentKind::Briefs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Frameworks => "frameworks",
            DocumentKind::Policy => "policy",
            DocumentKind::Briefs => "briefs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Frameworks => "Frameworks",
            DocumentKind::Policy => "Policy",
            DocumentKind::Briefs => "Briefs",
        }
    }
}

/// Framework, policy recommendation, or design brief (Framework screen).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub title: String,
    pub description: String,
    pub pages: u32,
    pub date: String,
    pub category: String,
}

impl Record for Document {
    const FACETS: &'static [&'static str] = &["kind", "category"];

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<&str> {
        Some(self.description.as_str())
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "kind" => Some(self.kind.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn meta(&self) -> Vec<String> {
        vec![format!("{} pages", self.pages), self.date.clone()]
    }
}

/// Recently submitted item (Upload screen).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Upload {
    pub name: String,
    pub kind: String,
    pub status: String,
}

impl Record for Upload {
    const FACETS: &'static [&'static str] = &["kind", "status"];

    fn title(&self) -> &str {
        &self.name
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "kind" => Some(self.kind.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn meta(&self) -> Vec<String> {
        vec![self.status.clone()]
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// All record collections, one per screen. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub uploads: Vec<Upload>,
}

/// Summary figures shown above the dataset list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetTotals {
    pub datasets: usize,
    pub records: u64,
    pub contributors: u64,
    pub countries: usize,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::parse(SAMPLE_CATALOG)
    }

    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        toml::from_str(contents).map_err(CatalogError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::parse(&contents)?;
        info!(
            "Loaded catalog from {} ({} datasets, {} stories, {} themes, {} documents, {} uploads)",
            path.display(),
            catalog.datasets.len(),
            catalog.stories.len(),
            catalog.themes.len(),
            catalog.documents.len(),
            catalog.uploads.len()
        );
        Ok(catalog)
    }

    /// `path` when given, the compiled-in sample otherwise.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::sample(),
        }
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn dataset_totals(&self) -> DatasetTotals {
        let countries: BTreeSet<&str> = self
            .datasets
            .iter()
            .map(|dataset| dataset.country.as_str())
            .collect();
        DatasetTotals {
            datasets: self.datasets.len(),
            records: self.datasets.iter().map(|d| u64::from(d.records)).sum(),
            contributors: self.datasets.iter().map(|d| u64::from(d.contributors)).sum(),
            countries: countries.len(),
        }
    }

    pub fn story_status_counts(&self) -> FacetCounts {
        aggregate(&self.stories, "status")
    }
}

/// `7412` → `"7,412"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}
