//! Campaign - A fundraising record
//!
//! A Campaign is an Entity: its identity is the [`CampaignId`] handed out by
//! the store at insertion time. Everything else is data supplied by whoever
//! seeds the store, described by [`NewCampaign`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Unique identifier for a Campaign
///
/// Assigned by the store, starting at 1. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(u32);

impl CampaignId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A campaign that has not been stored yet (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub goal_amount: Decimal,
    pub current_amount: Decimal,
}

impl NewCampaign {
    /// Create a campaign input with an empty description
    pub fn new(name: impl Into<String>, goal_amount: Decimal, current_amount: Decimal) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            goal_amount,
            current_amount,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Campaign - A stored fundraising record
///
/// Only a repository builds these (see [`Campaign::from_new`]), so every
/// `Campaign` in circulation carries an identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    id: CampaignId,
    name: String,
    description: String,
    goal_amount: Decimal,
    current_amount: Decimal,
}

impl Campaign {
    /// Attach a store-assigned identifier to a new campaign
    pub fn from_new(id: CampaignId, new: NewCampaign) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            goal_amount: new.goal_amount,
            current_amount: new.current_amount,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn goal_amount(&self) -> Decimal {
        self.goal_amount
    }

    pub fn current_amount(&self) -> Decimal {
        self.current_amount
    }

    // ========== Derived values ==========

    /// Share of the goal raised so far, as a whole percentage
    ///
    /// Not clamped: a campaign past its goal reports more than 100.
    /// Returns `None` when the goal is zero.
    pub fn funded_percent(&self) -> Option<Decimal> {
        let ratio = self.current_amount.checked_div(self.goal_amount)?;
        ratio
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Whether the amount raised has reached the goal
    pub fn is_funded(&self) -> bool {
        self.current_amount >= self.goal_amount
    }
}
