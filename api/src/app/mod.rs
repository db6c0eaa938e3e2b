//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod campaign_service;

pub use campaign_service::CampaignService;
