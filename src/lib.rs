//! Library crate for alias-menu.
//!
//! This crate exposes the building blocks of an alias selection menu:
//! - Alias and address records (`alias`)
//! - The ordered menu collection and its sort orders (`menu`)
//! - In-memory search helpers (`search`)
//! - Menu settings file (`config`)
//! - Error and result types (`error`)
//!
//! It is used by the `alias-menu` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alias;
pub mod config;
pub mod error;
pub mod menu;
pub mod search;

// Re-export commonly used items at the crate root for convenience
pub use alias::{Address, Alias};
pub use error::{MenuError, Result};
pub use menu::{AliasMenuData, AliasView, SortKey, SortMode};
