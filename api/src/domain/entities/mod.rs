//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod campaign;
pub mod rule;

pub use campaign::{Campaign, CampaignDetails, CampaignId};
pub use rule::{Rule, RuleId, RuleType, RuleVariant};
