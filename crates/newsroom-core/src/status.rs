//! Article lifecycle: draft → published → archived.
//!
//! Only the draft-to-published step consults the publishing gate.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{StatusError, StatusResult};
use crate::gate::PublishingDecision;

/// Lifecycle status of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ArticleStatus {
    /// Work in progress, not visible to readers.
    #[default]
    Draft,
    /// Live on the site.
    Published,
    /// Withdrawn from listings.
    Archived,
}

impl ArticleStatus {
    /// Returns the status as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Publish a draft, provided the gate allowed it.
    pub fn publish(self, decision: &PublishingDecision) -> StatusResult<Self> {
        if self != Self::Draft {
            return Err(StatusError::InvalidTransition {
                from: self,
                to: Self::Published,
            });
        }
        if !decision.can_publish {
            return Err(StatusError::Blocked {
                blockers: decision.blockers.clone(),
            });
        }
        Ok(Self::Published)
    }

    /// Archive a draft or a published article.
    pub fn archive(self) -> StatusResult<Self> {
        match self {
            Self::Draft | Self::Published => Ok(Self::Archived),
            Self::Archived => Err(StatusError::InvalidTransition {
                from: self,
                to: Self::Archived,
            }),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(format!(
                "unknown status: {other}. Use: draft, published, archived"
            )),
        }
    }
}
