//! Inventory register for a building-materials warehouse.
//!
//! This crate contains the item model and the in-memory register that owns
//! every stocked item, implemented purely as deterministic domain logic
//! (no IO, no persistence).

pub mod category;
pub mod item;
pub mod register;
pub mod seed;
pub mod shared;

pub use category::Category;
pub use item::{Item, NewItem, Summary};
pub use register::ItemRegister;
pub use shared::SharedRegister;
