//! PostgreSQL adapter for CampaignRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{
    Campaign, CampaignDetails, CampaignId, Rule, RuleId, RuleType, RuleVariant,
};
use crate::domain::ports::CampaignRepository;
use crate::entity::{campaign_rules, campaigns};
use crate::error::DomainError;

/// PostgreSQL implementation of CampaignRepository
pub struct PostgresCampaignRepository {
    db: DatabaseConnection,
}

impl PostgresCampaignRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CampaignRepository for PostgresCampaignRepository {
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError> {
        let results = campaigns::Entity::find()
            .find_with_related(campaign_rules::Entity)
            .order_by_asc(campaigns::Column::Id)
            .order_by_asc(campaign_rules::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results
            .into_iter()
            .map(|(campaign, rules)| to_campaign(campaign, rules))
            .collect()
    }

    async fn find_by_id(&self, id: CampaignId) -> Result<Option<Campaign>, DomainError> {
        let mut results = campaigns::Entity::find_by_id(id.0)
            .find_with_related(campaign_rules::Entity)
            .order_by_asc(campaign_rules::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match results.pop() {
            Some((campaign, rules)) => Ok(Some(to_campaign(campaign, rules)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, campaign: &Campaign) -> Result<CampaignId, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = campaigns::ActiveModel {
            description: Set(campaign.description.clone()),
            from_date: Set(campaign.from.fixed_offset()),
            to_date: Set(campaign.to.fixed_offset()),
            url: Set(campaign.url.clone()),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Insertion order becomes id order, which is the order every
        // load returns the rules in.
        for rule in &campaign.rules {
            let location_id = match rule.variant {
                RuleVariant::UserLocation { location_id } => Some(location_id),
                RuleVariant::Unknown { .. } => None,
            };

            campaign_rules::ActiveModel {
                campaign_id: Set(inserted.id),
                rule_type_id: Set(rule.variant.rule_type_id()),
                description: Set(rule.description.clone()),
                location_id: Set(location_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(CampaignId(inserted.id))
    }

    async fn update_details(
        &self,
        id: CampaignId,
        details: &CampaignDetails,
    ) -> Result<(), DomainError> {
        campaigns::ActiveModel {
            id: Set(id.0),
            description: Set(details.description.clone()),
            from_date: Set(details.from.fixed_offset()),
            to_date: Set(details.to.fixed_offset()),
            url: Set(details.url.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: CampaignId) -> Result<(), DomainError> {
        campaigns::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert a campaign row and its rule rows to the domain aggregate
fn to_campaign(
    model: campaigns::Model,
    rules: Vec<campaign_rules::Model>,
) -> Result<Campaign, DomainError> {
    let rules = rules
        .into_iter()
        .map(to_rule)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Campaign {
        id: CampaignId(model.id),
        description: model.description,
        from: model.from_date.with_timezone(&Utc),
        to: model.to_date.with_timezone(&Utc),
        url: model.url,
        rules,
    })
}

/// Convert a rule row to the domain entity
///
/// A row with an unregistered discriminator loads as `Unknown` and is
/// still surfaced; a known-typed row missing its required variant
/// column is storage corruption, not client input.
fn to_rule(model: campaign_rules::Model) -> Result<Rule, DomainError> {
    let variant = match RuleType::from_id(model.rule_type_id) {
        Some(RuleType::UserLocation) => {
            let location_id = model.location_id.ok_or_else(|| {
                DomainError::Database(format!(
                    "rule {} is a user location rule but has no location_id",
                    model.id
                ))
            })?;
            RuleVariant::UserLocation { location_id }
        }
        None => RuleVariant::Unknown {
            rule_type_id: model.rule_type_id,
        },
    };

    Ok(Rule {
        id: RuleId(model.id),
        campaign_id: CampaignId(model.campaign_id),
        description: model.description,
        variant,
    })
}
