//! Seed datasets
//!
//! The campaigns a fresh store starts with. Content is deployment data, so
//! it can come from a built-in set or from a JSON file.

use std::path::Path;

use rust_decimal::Decimal;
use tailspin_domain::NewCampaign;

use crate::config::SeedSource;
use crate::error::{DatasetNotFoundError, Result};
use crate::json::read_json;

/// Name of the dataset used when nothing else is configured
pub const DEFAULT_DATASET: &str = "showcase";

/// Names accepted by [`SeedDataset::named`]
pub const DATASET_NAMES: &[&str] = &["showcase", "minimal"];

/// An ordered list of campaigns to seed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    campaigns: Vec<NewCampaign>,
}

impl SeedDataset {
    pub fn new(campaigns: Vec<NewCampaign>) -> Self {
        Self { campaigns }
    }

    /// Resolve a configured seed source
    pub fn load(source: &SeedSource) -> Result<Self> {
        match source {
            SeedSource::Dataset(name) => Self::named(name),
            SeedSource::File(path) => Self::from_file(path),
        }
    }

    /// Look up a built-in dataset
    pub fn named(name: &str) -> Result<Self> {
        match name {
            "showcase" => Ok(Self::showcase()),
            "minimal" => Ok(Self::minimal()),
            _ => Err(DatasetNotFoundError {
                name: name.to_string(),
                available: DATASET_NAMES.iter().map(|n| n.to_string()).collect(),
            }
            .into()),
        }
    }

    /// Load a JSON array of campaigns
    pub fn from_file(path: &Path) -> Result<Self> {
        read_json(path).map(Self::new)
    }

    /// Four STEM toy campaigns at various stages of funding
    pub fn showcase() -> Self {
        Self::new(vec![
            NewCampaign::new(
                "AI-Powered Learning Assistant",
                Decimal::from(50_000),
                Decimal::from(42_500),
            )
            .with_description(
                "Revolutionary educational toy that uses AI to adapt to each child's learning \
                 style. Featuring GitHub Copilot integration for coding activities and \
                 interactive STEM challenges.",
            ),
            NewCampaign::new(
                "Cloud-Native Robotics Kit",
                Decimal::from(75_000),
                Decimal::from(28_750),
            )
            .with_description(
                "Build and program robots that connect to Azure cloud services. Perfect for \
                 teaching modern DevOps practices and cloud-first development to the next \
                 generation.",
            ),
            NewCampaign::new(
                "Live360 STEM Scholarship Fund",
                Decimal::from(100_000),
                Decimal::from(87_500),
            )
            .with_description(
                "Supporting aspiring developers and IT professionals with conference \
                 attendance, training materials, and mentorship opportunities. Empowering the \
                 future of technology.",
            ),
            NewCampaign::new(
                "GitHub Copilot for Kids",
                Decimal::from(25_000),
                Decimal::from(25_000),
            )
            .with_description(
                "Introducing young minds to AI-assisted programming with age-appropriate coding \
                 toys and interactive learning experiences. Making programming accessible and \
                 fun!",
            ),
        ])
    }

    /// Two toy campaigns, names and amounts only
    pub fn minimal() -> Self {
        Self::new(vec![
            NewCampaign::new("Sky Surfer", Decimal::from(5_000), Decimal::from(1_200)),
            NewCampaign::new("RoboRacer", Decimal::from(8_000), Decimal::from(3_500)),
        ])
    }

    pub fn campaigns(&self) -> &[NewCampaign] {
        &self.campaigns
    }

    pub fn into_campaigns(self) -> Vec<NewCampaign> {
        self.campaigns
    }
}
