//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod campaigns;

pub use campaigns::{
    create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign,
};
