use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered reporter. Seed users are immutable for the life of the
/// process; `points` feed the leaderboard only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub points: u32,
}

/// A comment on an issue. Immutable once created; there is no edit or
/// delete operation. `created_at` is a display string, not a parsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: User,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Pothole,
    StreetLight,
    WasteManagement,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 4] = [
        IssueCategory::Pothole,
        IssueCategory::StreetLight,
        IssueCategory::WasteManagement,
        IssueCategory::Other,
    ];

    /// Full badge label.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Pothole => "Pothole",
            IssueCategory::StreetLight => "Street Light",
            IssueCategory::WasteManagement => "Waste Management",
            IssueCategory::Other => "Other",
        }
    }

    /// Short form used in compact listings.
    pub fn short_label(self) -> &'static str {
        match self {
            IssueCategory::WasteManagement => "Waste",
            other => other.label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            IssueCategory::Pothole => "🕳",
            IssueCategory::StreetLight => "💡",
            IssueCategory::WasteManagement => "🗑",
            IssueCategory::Other => "📍",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueCategory::Pothole => "pothole",
            IssueCategory::StreetLight => "street-light",
            IssueCategory::WasteManagement => "waste-management",
            IssueCategory::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for IssueCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pothole" => Ok(IssueCategory::Pothole),
            "street-light" => Ok(IssueCategory::StreetLight),
            "waste-management" => Ok(IssueCategory::WasteManagement),
            "other" => Ok(IssueCategory::Other),
            _ => bail!(
                "Unknown category '{}'. Must be one of: pothole, street-light, waste-management, other",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    /// Badge color for the triage dashboard.
    pub fn style(self) -> &'static str {
        match self {
            IssueStatus::Open => "red",
            IssueStatus::InProgress => "yellow",
            IssueStatus::Resolved => "green",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        };
        f.write_str(name)
    }
}

impl FromStr for IssueStatus {
    type Err = anyhow::Error;

    /// Accepts the display names plus the lowercase forms used on the
    /// command line (`open`, `in-progress`, `resolved`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IssueStatus::Open),
            "in progress" | "in-progress" => Ok(IssueStatus::InProgress),
            "resolved" => Ok(IssueStatus::Resolved),
            _ => bail!(
                "Unknown status '{}'. Must be one of: open, in-progress, resolved",
                s
            ),
        }
    }
}

/// A reported civic problem. Only `status` is mutable after creation, and
/// only through the store's update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: User,
    pub created_at: String,
    pub location: Location,
    pub upvotes: u32,
    pub comments: Vec<Comment>,
    pub category: IssueCategory,
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_memo_url: Option<String>,
}
