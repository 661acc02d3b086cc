//! `warehouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup,
//! no storage).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemNumber;
