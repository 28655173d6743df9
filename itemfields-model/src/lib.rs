//! Core model for custom item fields.
//!
//! Defines the types every other crate in the workspace depends on:
//! - [`FieldDescriptor`]: a field name plus its placement in the item pane
//! - [`FieldPosition`]: the placement hint (`start`, `afterCreators`, `end`)
//! - [`codec`]: conversion between a [`FieldList`] and the preference string
//! - [`validation`]: name rules enforced at the editing boundary
//! - [`extra`]: the `key: value` line format of an item's extra field
//!
//! Nothing here has side effects; storage and host integration live in the
//! prefs, pane and settings crates.

pub mod codec;
mod descriptor;
pub mod extra;
pub mod validation;

pub use codec::{decode, encode, CUSTOM_FIELD_DATA_PREF};
pub use descriptor::{FieldDescriptor, FieldList, FieldPosition};
pub use validation::{NameError, FORBIDDEN_NAME_CHARACTERS};
