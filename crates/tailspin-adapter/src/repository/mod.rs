//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from tailspin-domain.

pub mod in_memory;
