//! `warehouse-cli` — interactive text menu over the inventory register.
//!
//! The menu owns its input and output streams and borrows the register for
//! the duration of the session; nothing here is global.

pub mod config;
pub mod error;
pub mod input;
pub mod menu;

pub use config::Config;
pub use error::CliError;
pub use menu::{Menu, MenuChoice};
