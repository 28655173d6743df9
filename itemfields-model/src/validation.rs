//! Field name rules.
//!
//! The preference string is delimited with `;` and `|`, and item extra
//! fields with `:`, so none of the three may appear in a field name.

use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Characters a field name may not contain.
pub const FORBIDDEN_NAME_CHARACTERS: [char; 3] = [':', ';', '|'];

/// Why a single field name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("field name is empty")]
    Empty,

    #[error("field name contains forbidden character '{0}'")]
    ForbiddenCharacter(char),
}

/// Returns true when `name` contains any of [`FORBIDDEN_NAME_CHARACTERS`].
pub fn contains_forbidden_characters(name: &str) -> bool {
    name.chars().any(|c| FORBIDDEN_NAME_CHARACTERS.contains(&c))
}

/// Checks one name in isolation. Uniqueness needs the whole list, see
/// [`duplicate_names`].
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARACTERS.contains(c)) {
        return Err(NameError::ForbiddenCharacter(c));
    }
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(())
}

/// Names that occur more than once, in sorted order.
pub fn duplicate_names<'a, I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            duplicates.insert(name.to_string());
        }
    }
    duplicates
}
