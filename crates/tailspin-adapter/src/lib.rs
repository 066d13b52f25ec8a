//! # Tailspin Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapter: axum routes for pages and the JSON API
//! - `view/` - Server-rendered HTML
//! - `repository/` - Storage implementations

pub mod controller;
pub mod repository;
pub mod view;

pub use controller::{router, AppState};
pub use repository::in_memory::InMemoryCampaignRepository;
