//! Store bootstrap
//!
//! Seeding is the only write the store ever sees. The repository goes in by
//! value and comes out behind an `Arc`, so nothing can read it before
//! seeding has finished.

use std::sync::Arc;

use tailspin_domain::{CampaignRepository, NewCampaign, SeedOutcome, Seeder};

/// A seeded, read-only repository and what seeding did to it
#[derive(Debug)]
pub struct Bootstrapped<R> {
    pub repository: Arc<R>,
    pub outcome: SeedOutcome,
}

/// Seed `repository` if it is empty, then freeze it
pub fn bootstrap_store<R>(mut repository: R, dataset: Vec<NewCampaign>) -> Bootstrapped<R>
where
    R: CampaignRepository,
{
    let outcome = Seeder::new().seed_if_empty(&mut repository, dataset);
    Bootstrapped {
        repository: Arc::new(repository),
        outcome,
    }
}
