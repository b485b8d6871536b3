use std::future::Future;

use crate::error::{ListingError, Result};
use crate::listing::{FileNode, ObjectId};

/// Backend that renames repository files and folders.
pub trait RenameService {
    /// Rename the item `id` to `new_name`. `path` is the folder containing a
    /// renamed folder, or the file's own path for files.
    ///
    /// Resolves to the item's new identifier.
    fn rename(
        &self,
        id: &str,
        new_name: &str,
        path: &str,
        kind: &str,
    ) -> impl Future<Output = Result<ObjectId>> + Send;
}

/// Commit the name already set on `file` through `service`.
///
/// On success the node takes the returned identifier. On failure its name is
/// restored to `previous` and the identifier is left untouched.
pub async fn rename_file<S: RenameService>(
    service: &S,
    file: &mut FileNode,
    previous: &str,
) -> Result<()> {
    let path = if file.is_folder() {
        &file.parent_path
    } else {
        &file.path
    };

    let result = service
        .rename(&file.object_id.id, &file.name, path, &file.kind)
        .await;
    match result {
        Ok(object_id) => {
            tracing::debug!(from = previous, to = %file.name, "renamed");
            file.object_id = object_id;
            Ok(())
        }
        Err(e) => {
            tracing::warn!(from = previous, to = %file.name, error = %e, "rename failed");
            let attempted = std::mem::replace(&mut file.name, previous.to_string());
            Err(match e {
                ListingError::Rename { .. } => e,
                other => ListingError::Rename {
                    name: attempted,
                    message: other.to_string(),
                },
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::listing::FOLDER_TYPE;

    /// Records every call; fails when the new name is in `reject`.
    #[derive(Default)]
    pub(crate) struct MockRenameService {
        pub calls: Mutex<Vec<(String, String, String, String)>>,
        pub reject: Vec<String>,
    }

    impl RenameService for MockRenameService {
        fn rename(
            &self,
            id: &str,
            new_name: &str,
            path: &str,
            kind: &str,
        ) -> impl Future<Output = Result<ObjectId>> + Send {
            self.calls.lock().unwrap().push((
                id.to_string(),
                new_name.to_string(),
                path.to_string(),
                kind.to_string(),
            ));
            let result = if self.reject.iter().any(|r| r == new_name) {
                Err(ListingError::Rename {
                    name: new_name.to_string(),
                    message: "name already exists".into(),
                })
            } else {
                Ok(ObjectId::new(format!("{}-renamed", id)))
            };
            async move { result }
        }
    }

    #[tokio::test]
    async fn success_replaces_object_id() {
        let service = MockRenameService::default();
        let mut file = FileNode::new("new.ktr", "ktr", "/home");
        file.object_id = ObjectId::new("id-1");

        rename_file(&service, &mut file, "old.ktr").await.unwrap();

        assert_eq!(file.name, "new.ktr");
        assert_eq!(file.object_id.id, "id-1-renamed");
        let calls = service.calls.lock().unwrap();
        assert_eq!(
            calls[0],
            (
                "id-1".to_string(),
                "new.ktr".to_string(),
                "/home/new.ktr".to_string(),
                "ktr".to_string()
            )
        );
    }

    #[tokio::test]
    async fn folders_send_parent_path() {
        let service = MockRenameService::default();
        let mut folder = FileNode::new("archive", FOLDER_TYPE, "/home");

        rename_file(&service, &mut folder, "old").await.unwrap();

        let calls = service.calls.lock().unwrap();
        assert_eq!(calls[0].2, "/home");
        assert_eq!(calls[0].3, FOLDER_TYPE);
    }

    #[tokio::test]
    async fn failure_restores_previous_name() {
        let service = MockRenameService {
            reject: vec!["taken.ktr".into()],
            ..Default::default()
        };
        let mut file = FileNode::new("taken.ktr", "ktr", "/home");
        file.object_id = ObjectId::new("id-7");

        let err = rename_file(&service, &mut file, "mine.ktr")
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::Rename { .. }));
        assert_eq!(file.name, "mine.ktr");
        assert_eq!(file.object_id.id, "id-7");
    }
}
