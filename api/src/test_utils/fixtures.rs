//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid value that can be customized.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Campaign, CampaignId, Rule, RuleId, RuleType, RuleVariant};
use crate::handlers::campaigns::{CampaignDto, RuleDto};

/// Create a test campaign with one user location rule
pub fn test_campaign() -> Campaign {
    let id = CampaignId(5);
    Campaign {
        id,
        description: "Spring Sale".to_string(),
        from: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        to: Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap(),
        url: "http://campaigns.test/spring-sale".to_string(),
        rules: vec![test_location_rule(id, 42)],
    }
}

/// Create a user location rule for the given campaign
pub fn test_location_rule(campaign_id: CampaignId, location_id: i32) -> Rule {
    Rule {
        id: RuleId(1),
        campaign_id,
        description: "US only".to_string(),
        variant: RuleVariant::UserLocation { location_id },
    }
}

/// Create a rule with a discriminator outside the registry
pub fn test_unknown_rule(campaign_id: CampaignId, rule_type_id: i32) -> Rule {
    Rule {
        id: RuleId(1),
        campaign_id,
        description: "mystery rule".to_string(),
        variant: RuleVariant::Unknown { rule_type_id },
    }
}

/// Create a test campaign DTO with one user location rule
pub fn test_campaign_dto() -> CampaignDto {
    CampaignDto {
        id: 5,
        description: "Spring Sale".to_string(),
        from: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        to: Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap(),
        url: "http://campaigns.test/spring-sale".to_string(),
        rules: vec![test_location_rule_dto(42)],
    }
}

/// Create a user location rule DTO
pub fn test_location_rule_dto(location_id: i32) -> RuleDto {
    RuleDto {
        id: 1,
        rule_type_id: RuleType::UserLocation.id(),
        description: "US only".to_string(),
        campaign_id: 5,
        location_id: Some(location_id),
    }
}
