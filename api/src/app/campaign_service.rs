//! Campaign service
//!
//! Orchestrates repository calls for the campaign CRUD operations.

use std::sync::Arc;

use crate::domain::entities::{Campaign, CampaignDetails, CampaignId};
use crate::domain::ports::CampaignRepository;
use crate::error::AppError;

/// Service for managing campaigns
pub struct CampaignService<CR>
where
    CR: CampaignRepository,
{
    campaigns: Arc<CR>,
}

impl<CR> CampaignService<CR>
where
    CR: CampaignRepository,
{
    pub fn new(campaigns: Arc<CR>) -> Self {
        Self { campaigns }
    }

    /// List all campaigns with their rules
    pub async fn list(&self) -> Result<Vec<Campaign>, AppError> {
        Ok(self.campaigns.find_all().await?)
    }

    /// Get a campaign by id
    pub async fn get(&self, id: CampaignId) -> Result<Option<Campaign>, AppError> {
        Ok(self.campaigns.find_by_id(id).await?)
    }

    /// Create a campaign together with its rules
    ///
    /// Returns the storage-assigned id.
    pub async fn create(&self, campaign: &Campaign) -> Result<CampaignId, AppError> {
        Ok(self.campaigns.create(campaign).await?)
    }

    /// Overwrite a campaign's scalar fields
    ///
    /// Rules are not modified by an update.
    pub async fn update(&self, id: CampaignId, details: &CampaignDetails) -> Result<(), AppError> {
        self.campaigns
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))?;

        self.campaigns.update_details(id, details).await?;
        Ok(())
    }

    /// Delete a campaign and the rules it owns
    pub async fn delete(&self, id: CampaignId) -> Result<(), AppError> {
        self.campaigns
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))?;

        self.campaigns.delete(id).await?;
        Ok(())
    }
}
