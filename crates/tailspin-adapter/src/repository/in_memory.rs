//! In-Memory Repository Implementation
//!
//! Campaigns live in a `Vec` for the life of the process. Nothing is
//! persisted; a restart reseeds from the configured dataset.

use tailspin_domain::model::campaign::{Campaign, CampaignId, NewCampaign};
use tailspin_domain::repository::campaign_repository::CampaignRepository;

/// In-memory Campaign Repository
///
/// No lock: the store is written once while it is still exclusively owned,
/// then shared behind an `Arc` for reads only.
#[derive(Debug, Clone)]
pub struct InMemoryCampaignRepository {
    /// Insertion order; `campaigns[i]` has id `i + 1`
    campaigns: Vec<Campaign>,
    next_id: u32,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self {
            campaigns: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignRepository for InMemoryCampaignRepository {
    fn insert_all(&mut self, campaigns: Vec<NewCampaign>) -> Vec<Campaign> {
        let mut stored = Vec::with_capacity(campaigns.len());
        for new in campaigns {
            let campaign = Campaign::from_new(CampaignId::new(self.next_id), new);
            self.next_id += 1;
            self.campaigns.push(campaign.clone());
            stored.push(campaign);
        }
        stored
    }

    fn find_by_id(&self, id: CampaignId) -> Option<Campaign> {
        let index = usize::try_from(id.get().checked_sub(1)?).ok()?;
        self.campaigns.get(index).cloned()
    }

    fn list_all(&self) -> Vec<Campaign> {
        self.campaigns.clone()
    }

    fn count(&self) -> usize {
        self.campaigns.len()
    }
}
