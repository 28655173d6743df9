//! Reading and writing `key: value` lines in an item's extra field.
//!
//! The host keeps free-form notes in the extra field; custom field values
//! live alongside them, one per line:
//!
//! ```text
//! tex.shorttitle: Foo
//! Reading group: week 3
//! ```
//!
//! Keys are compared after trimming, on both the stored line and the key
//! asked for, and line breaks inside a key are folded to spaces. Lines that
//! are not `key: value` pairs are left untouched.

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Folds `text` onto one line and trims it.
fn single_line(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ").trim().to_string()
}

fn line_has_key(line: &str, key: &str) -> bool {
    matches!(parse_line(line), Some((k, _)) if k == key)
}

/// Every value stored under `key`, in line order.
pub fn get_values(extra: &str, key: &str) -> Vec<String> {
    let key = single_line(key);
    extra
        .lines()
        .filter_map(parse_line)
        .filter(|(k, _)| *k == key.as_str())
        .map(|(_, v)| v.to_string())
        .collect()
}

/// Stores `value` as the only value of `key` and returns the new extra text.
///
/// The first existing line for `key` is replaced in place and any further
/// ones are dropped; without one, the pair is appended. An empty value
/// removes the key. Line breaks inside `value` are folded to spaces since a
/// value must stay on one line.
pub fn set_value(extra: &str, key: &str, value: &str) -> String {
    let key = single_line(key);
    let value = single_line(value);
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;

    for line in extra.lines() {
        if line_has_key(line, &key) {
            if !replaced && !value.is_empty() {
                lines.push(format!("{key}: {value}"));
            }
            replaced = true;
            continue;
        }
        lines.push(line.to_string());
    }

    if !replaced && !value.is_empty() {
        lines.push(format!("{key}: {value}"));
    }
    lines.join("\n")
}
