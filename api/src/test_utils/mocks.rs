//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Campaign, CampaignDetails, CampaignId, RuleId};
use crate::domain::ports::CampaignRepository;
use crate::error::DomainError;

/// In-memory CampaignRepository
///
/// Mirrors the database's id assignment: campaigns and rules get
/// consecutive positive ids on insert, and ids carried on the incoming
/// aggregate are ignored.
#[derive(Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<RwLock<HashMap<i32, Campaign>>>,
    next_campaign_id: Arc<RwLock<i32>>,
    next_rule_id: Arc<RwLock<i32>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a campaign, keeping the ids it carries
    pub fn with_campaign(self, campaign: Campaign) -> Self {
        {
            let mut campaigns = self.campaigns.write().unwrap();
            let mut next_campaign_id = self.next_campaign_id.write().unwrap();
            let mut next_rule_id = self.next_rule_id.write().unwrap();

            *next_campaign_id = (*next_campaign_id).max(campaign.id.0);
            for rule in &campaign.rules {
                *next_rule_id = (*next_rule_id).max(rule.id.0);
            }
            campaigns.insert(campaign.id.0, campaign);
        }
        self
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError> {
        let campaigns = self.campaigns.read().unwrap();
        let mut all: Vec<Campaign> = campaigns.values().cloned().collect();
        all.sort_by_key(|c| c.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: CampaignId) -> Result<Option<Campaign>, DomainError> {
        let campaigns = self.campaigns.read().unwrap();
        Ok(campaigns.get(&id.0).cloned())
    }

    async fn create(&self, campaign: &Campaign) -> Result<CampaignId, DomainError> {
        let mut campaigns = self.campaigns.write().unwrap();
        let mut next_campaign_id = self.next_campaign_id.write().unwrap();
        let mut next_rule_id = self.next_rule_id.write().unwrap();

        *next_campaign_id += 1;
        let id = CampaignId(*next_campaign_id);

        let mut stored = campaign.clone();
        stored.id = id;
        for rule in &mut stored.rules {
            *next_rule_id += 1;
            rule.id = RuleId(*next_rule_id);
            rule.campaign_id = id;
        }

        campaigns.insert(id.0, stored);
        Ok(id)
    }

    async fn update_details(
        &self,
        id: CampaignId,
        details: &CampaignDetails,
    ) -> Result<(), DomainError> {
        let mut campaigns = self.campaigns.write().unwrap();
        let campaign = campaigns
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound(format!("Campaign {} not found", id)))?;

        campaign.description = details.description.clone();
        campaign.from = details.from;
        campaign.to = details.to;
        campaign.url = details.url.clone();

        Ok(())
    }

    async fn delete(&self, id: CampaignId) -> Result<(), DomainError> {
        let mut campaigns = self.campaigns.write().unwrap();
        campaigns.remove(&id.0);
        Ok(())
    }
}
