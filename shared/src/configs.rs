//! Managed input types exchanged with the `/config` REST API
//!
//! These types are used for:
//! - Listing and inspecting a tenant's managed inputs
//! - Creating regional and tag-assigned inputs
//! - Decoding the backend's error bodies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::structured::StructuredInput;

/// Key/value labels that target an input at agents by attribute
pub type AssignmentTags = BTreeMap<String, String>;

/// Known tag names and the values reported for each, as served by `GET /config/{t}/tags`
pub type TagCatalog = BTreeMap<String, Vec<String>>;

/// Deployment region a regional input runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    West,
    Central,
    East,
}

impl Region {
    /// Every region, in the order the add dialog offers them
    pub const ALL: [Region; 3] = [Region::West, Region::Central, Region::East];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "west",
            Region::Central => "central",
            Region::East => "east",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the known regions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// A managed telegraf input as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    /// Backend-assigned identifier
    pub id: String,

    /// Display title given at creation
    #[serde(default)]
    pub title: Option<String>,

    /// The `[[inputs.*]]` block, opaque to the client
    #[serde(default)]
    pub text: Option<String>,

    /// Structured form of the input, when it was created that way
    #[serde(default)]
    pub structured: Option<StructuredInput>,

    /// Region for regionally targeted inputs
    #[serde(default)]
    pub region: Option<String>,

    /// Tags for tag-assigned inputs
    #[serde(default)]
    pub assignment_tags: Option<AssignmentTags>,

    /// Group linkage, if any
    #[serde(default)]
    pub group_id: Option<String>,

    #[serde(default)]
    pub tenant_id: Option<String>,

    /// Pinned telegraf instance for agent-self checks
    #[serde(default)]
    pub assigned_to: Option<String>,

    /// Instance currently running the input, filled in on lookups
    #[serde(default)]
    pub running_on: Option<String>,
}

impl ConfigEntry {
    /// Region name, or the assignment tags as `k=v` pairs
    pub fn target_label(&self) -> String {
        if let Some(region) = &self.region {
            return region.clone();
        }
        match &self.assignment_tags {
            Some(tags) if !tags.is_empty() => tags
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.region.is_none() && self.assignment_tags.is_some()
    }

    /// The input text, falling back to the rendered structured form
    pub fn effective_text(&self) -> String {
        match (&self.text, &self.structured) {
            (Some(text), _) if !text.is_empty() => text.clone(),
            (_, Some(structured)) => structured.render(),
            _ => String::new(),
        }
    }
}

/// Body of `POST /config/{t}/regional`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalDefinition {
    pub regions: Vec<Region>,
    pub text: String,
    pub title: String,
}

impl RegionalDefinition {
    /// A definition targeting a single region
    pub fn single(region: Region, text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            regions: vec![region],
            text: text.into(),
            title: title.into(),
        }
    }
}

/// Body of `POST /config/{t}/assigned`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedDefinition {
    pub text: String,
    pub title: String,
    pub assignment_tags: AssignmentTags,
}

/// Response to both create calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedConfigs {
    #[serde(default)]
    pub created: Vec<String>,
}

impl CreatedConfigs {
    /// The id reported to the user after a create
    pub fn first_id(&self) -> Option<&str> {
        self.created.first().map(String::as_str)
    }
}

/// Error body the backend sends with non-2xx responses
///
/// Only `message` is read; timestamps, paths and the like are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
