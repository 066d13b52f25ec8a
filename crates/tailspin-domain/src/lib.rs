//! # Tailspin Domain Layer
//!
//! Campaign vocabulary and the rules for populating the store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Campaign entity & NewCampaign input           ││
//! │  │  repository/- CampaignRepository trait (the port)           ││
//! │  │  service/   - Seeder                                        ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here performs I/O. Storage lives in `tailspin-adapter`,
//! wiring lives in `tailspin-app`.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::campaign::{Campaign, CampaignId, NewCampaign};
pub use repository::campaign_repository::CampaignRepository;
pub use service::seeder::{SeedOutcome, Seeder};
