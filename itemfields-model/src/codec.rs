//! Preference-string codec.
//!
//! The whole field list is persisted as one string:
//!
//! ```text
//! name1;position1|name2;position2|...
//! ```
//!
//! The empty string is the empty list. The format must stay bit-exact with
//! preferences written by earlier releases.

use crate::descriptor::{FieldDescriptor, FieldList, FieldPosition};

/// Name of the preference holding the encoded field list.
pub const CUSTOM_FIELD_DATA_PREF: &str = "custom-field-data";

/// Separates one field record from the next.
pub const RECORD_SEPARATOR: char = '|';

/// Separates a field's name from its position inside a record.
pub const NAME_POSITION_SEPARATOR: char = ';';

/// Decodes a preference string into a field list.
///
/// A record's name is the text before its first `;` and its position the text
/// between the first and second `;`; anything after a second `;` is ignored.
/// A record without `;` decodes to an [`FieldPosition::Unrecognized`]
/// position with empty text. Names are not checked for forbidden characters
/// here.
pub fn decode(pref: &str) -> FieldList {
    if pref.is_empty() {
        return Vec::new();
    }
    pref.split(RECORD_SEPARATOR).map(decode_record).collect()
}

fn decode_record(record: &str) -> FieldDescriptor {
    let mut parts = record.split(NAME_POSITION_SEPARATOR);
    let name = parts.next().unwrap_or_default();
    let position = match parts.next() {
        Some(position) => FieldPosition::from_wire(position),
        None => FieldPosition::Unrecognized(String::new()),
    };
    FieldDescriptor::new(name, position)
}

/// Encodes a field list into its preference string.
///
/// Left inverse of [`decode`] as long as no name or position contains `;`
/// or `|`.
pub fn encode(fields: &[FieldDescriptor]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(RECORD_SEPARATOR);
        }
        out.push_str(&field.name);
        out.push(NAME_POSITION_SEPARATOR);
        out.push_str(field.position.as_str());
    }
    out
}
