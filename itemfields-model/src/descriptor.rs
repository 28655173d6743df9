use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a custom field's row is placed in the host item pane.
///
/// Decoding never fails: a position the host does not know is kept verbatim
/// in [`FieldPosition::Unrecognized`] so callers can pick their own fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldPosition {
    #[default]
    /// Above every built-in row.
    Start,
    /// Directly below the creators block.
    AfterCreators,
    /// Below every built-in row.
    End,
    /// Raw text of a position outside the enum (empty when the record had none).
    Unrecognized(String),
}

impl FieldPosition {
    /// The positions the host understands, in wire-name order.
    pub const RECOGNIZED: [FieldPosition; 3] = [
        FieldPosition::Start,
        FieldPosition::AfterCreators,
        FieldPosition::End,
    ];

    /// Parses a wire name. Unknown names are preserved, not rejected.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "start" => Self::Start,
            "afterCreators" => Self::AfterCreators,
            "end" => Self::End,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The wire name written into the preference string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::AfterCreators => "afterCreators",
            Self::End => "end",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Returns `self` when recognized, otherwise `fallback`.
    #[must_use]
    pub fn or_fallback(&self, fallback: FieldPosition) -> FieldPosition {
        if self.is_recognized() {
            self.clone()
        } else {
            fallback
        }
    }
}

impl fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FieldPosition {
    fn from(raw: String) -> Self {
        Self::from_wire(&raw)
    }
}

impl From<FieldPosition> for String {
    fn from(position: FieldPosition) -> Self {
        position.as_str().to_string()
    }
}

/// One user-defined field: a unique name and where its row goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub position: FieldPosition,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, position: FieldPosition) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Ordered field definitions. Order only affects registration order; the
/// placement in the pane comes from each descriptor's [`FieldPosition`].
pub type FieldList = Vec<FieldDescriptor>;
