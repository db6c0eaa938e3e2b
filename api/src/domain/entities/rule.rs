//! Rule domain entity
//!
//! A targeting condition attached to a campaign, polymorphic by an
//! integer discriminator stored with each rule.

use serde::{Deserialize, Serialize};

use super::campaign::CampaignId;

/// Unique identifier for a rule, assigned by storage on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(pub i32);

impl From<i32> for RuleId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminator value for [`RuleType::UserLocation`]
pub const USER_LOCATION_RULE_TYPE_ID: i32 = 1;

/// Closed registry of known rule types
///
/// Maps the integer discriminator stored with each rule to a concrete
/// variant. Adding a rule type means one case here, one [`RuleVariant`]
/// case, and one branch in each mapping direction; call sites that
/// dispatch through [`RuleType::from_id`] stay unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    UserLocation,
}

impl RuleType {
    /// Resolve a discriminator to a known rule type
    ///
    /// `None` means the discriminator matches no registry entry. Never
    /// fails for any input.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            USER_LOCATION_RULE_TYPE_ID => Some(RuleType::UserLocation),
            _ => None,
        }
    }

    /// The discriminator this rule type is stored under
    pub fn id(self) -> i32 {
        match self {
            RuleType::UserLocation => USER_LOCATION_RULE_TYPE_ID,
        }
    }
}

/// Variant-specific rule data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVariant {
    /// Restricts the campaign to users in a given location
    UserLocation { location_id: i32 },
    /// A rule whose discriminator matches no registry entry
    ///
    /// Representable so rows loaded from storage are never dropped on
    /// the way out; the wire mapping emits their common fields only.
    Unknown { rule_type_id: i32 },
}

impl RuleVariant {
    /// The discriminator this variant serializes as
    pub fn rule_type_id(&self) -> i32 {
        match self {
            RuleVariant::UserLocation { .. } => RuleType::UserLocation.id(),
            RuleVariant::Unknown { rule_type_id } => *rule_type_id,
        }
    }
}

/// A targeting condition owned by exactly one campaign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    /// Back reference for the persistence join; non-owning
    pub campaign_id: CampaignId,
    pub description: String,
    pub variant: RuleVariant,
}
