//! SeaORM entities
//!
//! Table mappings for the PostgreSQL schema. Conversions to domain
//! entities live in the postgres adapter.

pub mod campaign_rules;
pub mod campaigns;
