//! Campaign Repository - Abstract storage for Campaigns
//!
//! This trait defines what operations the domain needs.
//! How they're implemented is not our concern here.

use crate::model::campaign::{Campaign, CampaignId, NewCampaign};

/// Campaign Repository Trait
///
/// This is a PORT in hexagonal architecture.
///
/// Every operation is total. A lookup for an identifier that was never
/// assigned yields `None`, which the presentation layer turns into a
/// redirect. No update or delete.
pub trait CampaignRepository {
    /// Store campaigns, assigning the next identifiers in input order
    ///
    /// Identifiers start at 1 and keep counting across calls.
    fn insert_all(&mut self, campaigns: Vec<NewCampaign>) -> Vec<Campaign>;

    /// Find a campaign by ID
    fn find_by_id(&self, id: CampaignId) -> Option<Campaign>;

    /// List all campaigns in insertion order
    fn list_all(&self) -> Vec<Campaign>;

    /// Count all campaigns
    fn count(&self) -> usize;

    /// Check whether nothing has been stored yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
