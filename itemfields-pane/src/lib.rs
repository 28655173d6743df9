//! Item-pane integration for custom item fields.
//!
//! [`FieldRegistry`] owns one host row per configured field and rebuilds the
//! whole set whenever the field preference changes. Each row carries a
//! [`RowContext`] that the host calls to read and write the field's value in
//! an item's extra field.
//!
//! The host is reached only through the [`ItemPane`] and [`ItemStore`]
//! traits; [`MemoryItemPane`] and [`MemoryItemStore`] implement them in
//! process for tests and the command line.

mod config;
mod error;
mod host;
mod memory;
mod registry;
mod row;

pub use config::PaneConfig;
pub use error::{PaneError, PaneResult};
pub use host::{InfoRowSpec, ItemId, ItemPane, ItemStore, RowHandle};
pub use memory::{MemoryItemPane, MemoryItemStore};
pub use registry::FieldRegistry;
pub use row::RowContext;
