use itemfields_model::FieldPosition;
use std::fmt;

/// Options of the position selector, in display order. The first is the
/// default for new rows and for stored positions that are not recognized.
pub const POSITION_OPTIONS: [FieldPosition; 3] = [
    FieldPosition::Start,
    FieldPosition::End,
    FieldPosition::AfterCreators,
];

/// Index of `position` in [`POSITION_OPTIONS`], or 0 when absent.
pub(crate) fn option_index(position: &FieldPosition) -> usize {
    POSITION_OPTIONS
        .iter()
        .position(|option| option == position)
        .unwrap_or(0)
}

/// Identifies a row for as long as it is in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    pub(crate) const TEMPLATE: RowId = RowId(0);

    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Validity marker shown on a row's name input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    #[default]
    Valid,
    InvalidCharacters,
    Duplicate,
    EmptyName,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    /// Custom validity message set on the input; empty when valid.
    pub fn message(self) -> &'static str {
        match self {
            Validity::Valid => "",
            Validity::InvalidCharacters => "invalid-characters",
            Validity::Duplicate => "duplicate",
            Validity::EmptyName => "empty",
        }
    }
}

/// One row of the settings table: a name input and a position selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub(crate) id: RowId,
    pub(crate) name: String,
    pub(crate) selected: usize,
    pub(crate) hidden: bool,
    pub(crate) validity: Validity,
}

impl TableRow {
    /// The hidden row every visible row is cloned from.
    pub(crate) fn template() -> Self {
        Self {
            id: RowId::TEMPLATE,
            name: String::new(),
            selected: 0,
            hidden: true,
            validity: Validity::Valid,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selected position option.
    pub fn position(&self) -> FieldPosition {
        POSITION_OPTIONS[self.selected].clone()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }
}
