//! Submission draft validation and the defaults-enforcing conversion into
//! an [`Issue`].
//!
//! Every rule mirrors the report form: failures are collected per field and
//! surfaced together rather than one at a time.

use chrono::Utc;
use std::fmt;
use uuid::Uuid;

use crate::models::{Issue, IssueCategory, IssueStatus, Location, User};

pub const MIN_TITLE_CHARS: usize = 10;
pub const MIN_DESCRIPTION_CHARS: usize = 20;
pub const MIN_LOCATION_CHARS: usize = 5;

/// Default map center, used when a submission has no coordinates.
pub const DEFAULT_LAT: f64 = 18.5204;
pub const DEFAULT_LNG: f64 = 73.8567;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid submission:")?;
        for error in &self.errors {
            write!(f, "\n  {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A report as entered, before any defaults are applied.
///
/// The draft deliberately has no id, status, upvote, or comment fields:
/// those are minted by [`IssueDraft::into_issue`] and cannot be overridden
/// by the submitter.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location_name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub photo_url: Option<String>,
    pub voice_memo_url: Option<String>,
    pub author: User,
}

impl IssueDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.title.chars().count() < MIN_TITLE_CHARS {
            errors.push(FieldError {
                field: "title",
                message: format!("Title must be at least {} characters.", MIN_TITLE_CHARS),
            });
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError {
                field: "description",
                message: format!(
                    "Description must be at least {} characters.",
                    MIN_DESCRIPTION_CHARS
                ),
            });
        }
        if self.location_name.chars().count() < MIN_LOCATION_CHARS {
            errors.push(FieldError {
                field: "location",
                message: "Please provide a location or address.".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }

    /// Validates the draft and constructs the issue with enforced defaults:
    /// fresh UUID id, status Open, zero upvotes, no comments.
    pub fn into_issue(self) -> Result<Issue, ValidationError> {
        self.validate()?;

        Ok(Issue {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            author: self.author,
            created_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            location: Location {
                name: self.location_name,
                lat: self.lat.unwrap_or(DEFAULT_LAT),
                lng: self.lng.unwrap_or(DEFAULT_LNG),
            },
            upvotes: 0,
            comments: Vec::new(),
            category: self.category,
            status: IssueStatus::Open,
            photo_url: self.photo_url,
            voice_memo_url: self.voice_memo_url,
        })
    }
}
