//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Campaign, CampaignDetails, CampaignId};
use crate::error::DomainError;

/// Repository for Campaign aggregates
///
/// Campaigns own their rules: every load returns the aggregate with its
/// rules eagerly attached in insertion order, and delete cascades to them.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Load all campaigns with their rules
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError>;

    /// Load one campaign with its rules
    async fn find_by_id(&self, id: CampaignId) -> Result<Option<Campaign>, DomainError>;

    /// Insert a campaign and its owned rules as one unit
    ///
    /// Ids carried on the aggregate are ignored; returns the
    /// storage-assigned id.
    async fn create(&self, campaign: &Campaign) -> Result<CampaignId, DomainError>;

    /// Overwrite the campaign's scalar fields; rules are untouched
    async fn update_details(
        &self,
        id: CampaignId,
        details: &CampaignDetails,
    ) -> Result<(), DomainError>;

    /// Remove a campaign, cascading to its rules
    async fn delete(&self, id: CampaignId) -> Result<(), DomainError>;
}
