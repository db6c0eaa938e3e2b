//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod campaign_repo;

pub use campaign_repo::PostgresCampaignRepository;
