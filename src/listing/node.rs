use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ListingError, Result};

/// Type tag the backend uses for folders.
pub const FOLDER_TYPE: &str = "folder";

/// Repository identifier of a file or folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectId {
    pub id: String,
}

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A node of the file tree supplied by the listing/search backend.
///
/// Field names follow the backend's camelCase JSON. `children` is always
/// present after deserialization, even when the backend leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileNode {
    pub name: String,
    /// `"folder"` or a file-type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Last saved time in milliseconds since the Unix epoch.
    pub date: i64,
    pub parent_path: String,
    pub path: String,
    pub object_id: ObjectId,
    pub children: Vec<FileNode>,
    /// Search-match flag, set by the search collaborator.
    pub in_result: bool,
    pub is_editing: bool,
}

impl FileNode {
    /// Create a file node with the given type tag and no children.
    pub fn new(name: &str, kind: &str, parent_path: &str) -> Self {
        let path = if parent_path.ends_with('/') {
            format!("{}{}", parent_path, name)
        } else {
            format!("{}/{}", parent_path, name)
        };
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            parent_path: parent_path.to_string(),
            object_id: ObjectId::new(path.clone()),
            path,
            ..Default::default()
        }
    }

    /// Create a folder node with the given children.
    pub fn folder(name: &str, parent_path: &str, children: Vec<FileNode>) -> Self {
        Self {
            children,
            ..Self::new(name, FOLDER_TYPE, parent_path)
        }
    }

    /// Load a folder node from a backend JSON document on disk.
    ///
    /// A missing file is an `InvalidPath`; any other read failure is
    /// reported as I/O.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ListingError::InvalidPath(format!("{} does not exist", path.display()))
            }
            _ => ListingError::Io(e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FOLDER_TYPE
    }

    pub fn with_date(mut self, date: i64) -> Self {
        self.date = date;
        self
    }

    pub fn matching(mut self) -> Self {
        self.in_result = true;
        self
    }

    /// Find a mutable reference to a node in this subtree by path.
    pub fn find_mut(&mut self, target: &str) -> Option<&mut FileNode> {
        if self.path == target {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(target))
    }
}

/// A node paired with its position in the pre-sort sequence.
#[derive(Debug, Clone, Copy)]
pub struct IndexedEntry<'a> {
    pub value: &'a FileNode,
    pub index: usize,
}
