use std::cmp::Ordering;

use super::natural::natural_compare;
use super::node::{FileNode, IndexedEntry};

/// Column a listing can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    Type,
    Date,
}

impl SortField {
    /// Parse a sort field from config/CLI text. Unknown values fall back to `Name`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "type" => SortField::Type,
            "date" => SortField::Date,
            _ => SortField::Name,
        }
    }

    /// Key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Type => "type",
            SortField::Date => "date",
        }
    }
}

/// Position in the sort-direction cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Backend order, no sorting applied.
    #[default]
    Original,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next state when the same column header is clicked again.
    ///
    /// `Original` is only ever an entry state.
    pub fn next(&self) -> Self {
        match self {
            SortDirection::Original | SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }
}

/// Current sort column and direction of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub state: SortDirection,
    pub reverse: bool,
    pub field: SortField,
}

impl SortState {
    /// State after a folder change: backend order, by name.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Column header click. A different column always starts a fresh cycle.
    pub fn sort_files(&mut self, field: SortField) {
        let current = if self.field == field {
            self.state
        } else {
            SortDirection::Original
        };
        let next = current.next();
        self.state = next;
        self.reverse = next == SortDirection::Descending;
        self.field = field;
        tracing::debug!(field = field.key(), state = ?next, "sort state changed");
    }

    /// Whether the listing should be shown in backend order.
    pub fn is_original(&self) -> bool {
        self.state == SortDirection::Original
    }
}

/// Compare two entries: folders first, then the sort field, then original
/// position.
///
/// `reverse` only inverts the field comparison; folders stay on top and
/// equal entries keep their original order in both directions.
pub fn compare_files(a: &IndexedEntry, b: &IndexedEntry, sort: &SortState) -> Ordering {
    folders_first(a.value, b.value)
        .then_with(|| {
            let cmp = compare_field(a.value, b.value, sort.field);
            if sort.reverse {
                cmp.reverse()
            } else {
                cmp
            }
        })
        .then_with(|| a.index.cmp(&b.index))
}

fn folders_first(a: &FileNode, b: &FileNode) -> Ordering {
    if a.kind == b.kind {
        return Ordering::Equal;
    }
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn compare_field(a: &FileNode, b: &FileNode, field: SortField) -> Ordering {
    match field {
        SortField::Name => natural_compare(&a.name, &b.name),
        SortField::Type => a.kind.cmp(&b.kind),
        SortField::Date => a.date.cmp(&b.date),
    }
}

/// Order `files` for display. `Original` keeps the given order.
pub fn sort_entries<'a>(files: &[&'a FileNode], sort: &SortState) -> Vec<&'a FileNode> {
    if sort.is_original() {
        return files.to_vec();
    }
    let mut entries: Vec<IndexedEntry<'a>> = files
        .iter()
        .enumerate()
        .map(|(index, &value)| IndexedEntry { value, index })
        .collect();
    entries.sort_by(|a, b| compare_files(a, b, sort));
    entries.into_iter().map(|e| e.value).collect()
}
