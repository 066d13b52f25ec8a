//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the domain needs from storage,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────────
//! trait CampaignRepository│  InMemoryCampaignRepository
//!   fn insert_all()       │
//!   fn find_by_id()       │
//! ```

pub mod campaign_repository;
