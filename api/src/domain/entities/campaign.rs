//! Campaign domain entity
//!
//! A marketing promotion with an active date window and targeting rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rule::Rule;

/// Unique identifier for a campaign, assigned by storage on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub i32);

impl From<i32> for CampaignId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A marketing campaign and the rules it owns
///
/// Rules are exclusively owned: created together with the campaign,
/// never shared, and removed with it. Their order is insertion order
/// and is meaningful for display.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: CampaignId,
    pub description: String,
    /// Start of the active window. `from <= to` is expected but not enforced.
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub url: String,
    pub rules: Vec<Rule>,
}

impl Campaign {
    /// Check whether the campaign window covers the given instant
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.to
    }
}

/// The scalar fields overwritten by an update
///
/// Rules are never modified through an update; they only change by
/// recreating the campaign.
#[derive(Debug, Clone)]
pub struct CampaignDetails {
    pub description: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub url: String,
}
