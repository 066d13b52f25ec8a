//! # Tailspin Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! - [`bootstrap_store`] seeds a repository once and freezes it for sharing
//! - [`CampaignCatalog`] answers the read queries the pages need

pub mod bootstrap;
pub mod catalog;

pub use bootstrap::{bootstrap_store, Bootstrapped};
pub use catalog::{CampaignCatalog, SharedRepository};
pub use tailspin_domain;
