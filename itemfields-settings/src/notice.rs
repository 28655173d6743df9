/// Which validation failure a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    InvalidCharacters,
    DuplicateNames,
    EmptyName,
}

/// A modal message with a title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        let (title, description) = match kind {
            NoticeKind::InvalidCharacters => (
                "Invalid custom field name",
                "Custom field names cannot contain ':', ';' or '|'. Fix the highlighted rows and save again.",
            ),
            NoticeKind::DuplicateNames => (
                "Duplicate custom field names",
                "Every custom field needs a unique name. Rename the highlighted rows and save again.",
            ),
            NoticeKind::EmptyName => (
                "Empty custom field name",
                "Every custom field needs a name. Fill in or remove the highlighted rows and save again.",
            ),
        };
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Shows notices to the user.
pub trait Notifier {
    fn alert(&self, notice: &Notice);
}
