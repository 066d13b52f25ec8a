//! Domain Models - The vocabulary of Tailspin
//!
//! A single entity for now: the fundraising Campaign.

pub mod campaign;
