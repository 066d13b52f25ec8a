//! Server-rendered HTML
//!
//! Pages are plain strings built from campaign data. All campaign text goes
//! through [`format::escape_html`] before it reaches the markup.

pub mod format;
pub mod pages;
