use tokio::sync::mpsc;

use crate::error::{ListingError, Result};
use crate::event::ListingEvent;
use crate::listing::{get_files, sort_entries, FileNode, SortField, SortState};
use crate::rename::{rename_file, RenameService};

/// State of the file list inside an open/save dialog.
pub struct FileList {
    /// Folder whose children are listed.
    pub folder: FileNode,
    /// Current search term; non-empty switches to search mode.
    pub search: String,
    pub sort: SortState,
    /// Path of the selected file.
    pub selected: Option<String>,
    /// Entries (browse) or matches (search) found by the last `get_files`.
    pub match_count: usize,
    pub has_results: bool,
    events: mpsc::UnboundedSender<ListingEvent>,
}

impl FileList {
    /// Create an empty file list that reports to `events`.
    pub fn new(events: mpsc::UnboundedSender<ListingEvent>) -> Self {
        Self {
            folder: FileNode::default(),
            search: String::new(),
            sort: SortState::default(),
            selected: None,
            match_count: 0,
            has_results: false,
            events,
        }
    }

    /// Navigate to another folder. Clears the selection and the column sort.
    pub fn set_folder(&mut self, folder: FileNode) {
        tracing::debug!(path = %folder.path, "folder changed");
        self.folder = folder;
        self.selected = None;
        self.sort.reset();
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Visible files in display order. Refreshes `match_count` and
    /// `has_results`.
    pub fn get_files(&mut self) -> Vec<&FileNode> {
        let listing = get_files(
            Some(self.folder.children.as_slice()),
            !self.search.is_empty(),
        );
        self.match_count = listing.match_count;
        self.has_results = listing.has_results;
        tracing::debug!(
            files = listing.files.len(),
            matches = listing.match_count,
            "listing refreshed"
        );
        sort_entries(&listing.files, &self.sort)
    }

    /// Column header click.
    pub fn sort_files(&mut self, field: SortField) {
        self.sort.sort_files(field);
    }

    pub fn select_file(&mut self, file: &FileNode) {
        self.selected = Some(file.path.clone());
        self.emit(ListingEvent::Select(file.clone()));
    }

    /// Open `file` unless its name is being edited.
    pub fn commit_file(&self, file: &FileNode) {
        if !file.is_editing {
            self.emit(ListingEvent::Open(file.clone()));
        }
    }

    /// Rename the node at `path` to `new_name` through `service`.
    ///
    /// On failure the old name is restored and an `Error` event is emitted.
    pub async fn rename<S: RenameService>(
        &mut self,
        service: &S,
        path: &str,
        new_name: &str,
    ) -> Result<()> {
        let node = self
            .folder
            .find_mut(path)
            .ok_or_else(|| ListingError::NotFound(path.to_string()))?;
        let previous = std::mem::replace(&mut node.name, new_name.to_string());
        node.is_editing = false;

        let result = rename_file(service, node, &previous).await;
        if let Err(e) = &result {
            self.emit(ListingEvent::Error {
                message: e.to_string(),
            });
        }
        result
    }

    fn emit(&self, event: ListingEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("listing event dropped, receiver closed");
        }
    }
}
