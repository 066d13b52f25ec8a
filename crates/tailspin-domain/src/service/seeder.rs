//! Seeder - Gives an empty store its baseline campaigns
//!
//! Seeding is a one-shot guard, not a merge: a store that already holds
//! anything is left alone, whatever the dataset contains.
//!
//! This is pure domain logic - no I/O, no logging. The caller decides what
//! to do with the returned [`SeedOutcome`].

use crate::model::campaign::{Campaign, NewCampaign};
use crate::repository::campaign_repository::CampaignRepository;

/// What a seeding attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and now holds the dataset
    Seeded { inserted: Vec<Campaign> },
    /// The store already had campaigns; nothing was written
    Skipped { existing: usize },
}

impl SeedOutcome {
    /// Number of campaigns written by this attempt
    pub fn inserted_count(&self) -> usize {
        match self {
            SeedOutcome::Seeded { inserted } => inserted.len(),
            SeedOutcome::Skipped { .. } => 0,
        }
    }
}

/// Seeder - stateless domain service
#[derive(Debug, Clone, Copy, Default)]
pub struct Seeder;

impl Seeder {
    /// Create a new Seeder
    pub fn new() -> Self {
        Self
    }

    /// Insert `dataset` only if `repo` is empty
    pub fn seed_if_empty<R>(&self, repo: &mut R, dataset: Vec<NewCampaign>) -> SeedOutcome
    where
        R: CampaignRepository + ?Sized,
    {
        let existing = repo.count();
        if existing > 0 {
            return SeedOutcome::Skipped { existing };
        }

        SeedOutcome::Seeded {
            inserted: repo.insert_all(dataset),
        }
    }
}
