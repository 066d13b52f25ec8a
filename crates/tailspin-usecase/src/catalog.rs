//! Campaign Catalog - read queries for the list and detail pages

use std::sync::Arc;

use tailspin_domain::{Campaign, CampaignId, CampaignRepository};

/// Shared handle on a frozen repository
pub type SharedRepository = Arc<dyn CampaignRepository + Send + Sync>;

/// Read-only view over the campaign store
///
/// Cheap to clone; every clone reads the same repository.
#[derive(Clone)]
pub struct CampaignCatalog {
    repository: SharedRepository,
}

impl CampaignCatalog {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Every campaign, in the order it was stored
    pub fn list(&self) -> Vec<Campaign> {
        self.repository.list_all()
    }

    /// A single campaign, or `None` when the id was never assigned
    pub fn get(&self, id: CampaignId) -> Option<Campaign> {
        self.repository.find_by_id(id)
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}

impl core::fmt::Debug for CampaignCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CampaignCatalog")
            .field("campaigns", &self.repository.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_store;
    use crate::test_support::VecRepo;
    use rust_decimal::Decimal;
    use tailspin_domain::NewCampaign;

    fn catalog() -> CampaignCatalog {
        let boot = bootstrap_store(
            VecRepo::default(),
            vec![
                NewCampaign::new("Sky Surfer", Decimal::from(5000), Decimal::from(1200)),
                NewCampaign::new("RoboRacer", Decimal::from(8000), Decimal::from(3500)),
            ],
        );
        CampaignCatalog::new(boot.repository)
    }

    #[test]
    fn test_list_and_get() {
        let catalog = catalog();

        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.get(CampaignId::new(2)).unwrap().name(), "RoboRacer");
        assert!(catalog.get(CampaignId::new(3)).is_none());

        let names: Vec<String> = catalog.list().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["Sky Surfer", "RoboRacer"]);
    }

    #[test]
    fn test_clones_share_store() {
        let catalog = catalog();
        let other = catalog.clone();
        assert_eq!(catalog.list(), other.list());
    }
}
