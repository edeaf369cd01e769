use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{ErrorKind, Shell, io_error_kind};
use crate::storage::{DirEntry, EntryKind};
use crate::utils::path::normalize_entry_name;

/// Defines errors that can occur during plain file operations.
//
// // 定义普通文件操作中可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The target does not exist.
    //
    // // 目标不存在。
    #[error("File or directory '{0}' does not exist.")]
    NotFound(String),

    /// The target already exists.
    //
    // // 目标已存在。
    #[error("File or directory '{0}' already exists.")]
    AlreadyExists(String),

    /// The target was already gone, but its memory reservation was released.
    //
    // // 目标已不存在，但其内存分配已被释放。
    #[error("File or directory '{name}' does not exist. Its allocation of {released_kb} KB has been released.")]
    NotFoundReleased { name: String, released_kb: u64 },

    /// A file was required but the path is something else.
    //
    // // 需要一个文件，但路径指向其他类型。
    #[error("The provided path is not a file: {0:?}")]
    NotAFile(PathBuf),

    /// An I/O error occurred in the storage backend.
    //
    // // 存储后端发生 I/O 错误。
    #[error("File system error: {0}")]
    Io(#[from] io::Error),
}

impl FileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileError::NotFound(_) | FileError::NotFoundReleased { .. } => ErrorKind::NotFound,
            FileError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            FileError::NotAFile(_) => ErrorKind::InvalidArgument,
            FileError::Io(e) => io_error_kind(e),
        }
    }
}

/// What `rm` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReport {
    pub kind: EntryKind,
    /// Ledger entries released along with the target, `(name, reserved_kb)`.
    pub released: Vec<(String, u64)>,
}

impl Shell {
    fn require_file(&self, name: &str) -> Result<(), FileError> {
        if !self.storage().exists(name)? {
            return Err(FileError::NotFound(name.to_string()));
        }
        if self.storage().is_dir(name)? {
            return Err(FileError::NotAFile(PathBuf::from(name)));
        }
        Ok(())
    }

    /// Creates an empty file (`touch`).
    pub fn create_file(&mut self, name: &str) -> Result<(), FileError> {
        self.tracked(format!("Create File: {}", name), |shell| {
            if shell.storage().exists(name)? {
                return Err(FileError::AlreadyExists(name.to_string()));
            }
            shell.storage().create_new(name)?;
            info!(file = name, "file created");
            Ok(())
        })
    }

    /// Creates a directory (`mkdir`).
    pub fn make_directory(&mut self, name: &str) -> Result<(), FileError> {
        self.tracked(format!("Create Directory: {}", name), |shell| {
            if shell.storage().exists(name)? {
                return Err(FileError::AlreadyExists(name.to_string()));
            }
            shell.storage().create_dir(name)?;
            info!(file = name, "directory created");
            Ok(())
        })
    }

    /// Removes a file or a directory tree (`rm`).
    ///
    /// Ledger entries are released only after the removal succeeded. When the
    /// target is already gone its own entry is still released and reported
    /// through [`FileError::NotFoundReleased`].
    pub fn remove(&mut self, name: &str) -> Result<RemoveReport, FileError> {
        self.tracked(format!("Remove File/Directory: {}", name), |shell| {
            let key = normalize_entry_name(name);

            if !shell.storage().exists(name)? {
                return Err(match shell.ledger.deallocate(&key) {
                    Some(released_kb) => FileError::NotFoundReleased {
                        name: name.to_string(),
                        released_kb,
                    },
                    None => FileError::NotFound(name.to_string()),
                });
            }

            let kind = shell.storage().remove(name)?;

            let mut released: Vec<(String, u64)> = shell
                .ledger
                .deallocate(&key)
                .map(|size| (key.clone(), size))
                .into_iter()
                .collect();
            if kind == EntryKind::Directory {
                released.extend(shell.ledger.release_under(&key));
            }
            info!(file = name, ?kind, released = released.len(), "removed");
            Ok(RemoveReport { kind, released })
        })
    }

    /// Copies an external file into the working directory (`add`).
    ///
    /// Returns the name the copy was stored under. An existing file with the
    /// same name is overwritten.
    pub fn add_file(&mut self, source: &Path) -> Result<String, FileError> {
        self.tracked(format!("Add File: {}", source.display()), |shell| {
            if !source.exists() {
                return Err(FileError::NotFound(source.display().to_string()));
            }
            if !source.is_file() {
                return Err(FileError::NotAFile(source.to_path_buf()));
            }
            let name = shell.storage().copy_in(source)?;
            info!(source = ?source, stored = %name, "file added");
            Ok(name)
        })
    }

    /// Returns the content of a file (`read`).
    pub fn read_file(&mut self, name: &str) -> Result<Vec<u8>, FileError> {
        self.tracked(format!("Read File: {}", name), |shell| {
            shell.require_file(name)?;
            Ok(shell.storage().read_all(name)?)
        })
    }

    /// Replaces the content of an existing file (`write`).
    pub fn write_file(&mut self, name: &str, content: &[u8]) -> Result<(), FileError> {
        self.write_file_with(name, || Ok(content.to_vec()))
    }

    /// Like [`Shell::write_file`], but only asks `produce` for the content
    /// once the target is known to be an existing file.
    pub fn write_file_with<F>(&mut self, name: &str, produce: F) -> Result<(), FileError>
    where
        F: FnOnce() -> io::Result<Vec<u8>>,
    {
        self.tracked(format!("Write File: {}", name), |shell| {
            shell.require_file(name)?;
            let content = produce()?;
            shell.storage().write_all(name, &content)?;
            info!(file = name, bytes = content.len(), "content written");
            Ok(())
        })
    }

    /// Hands the absolute path of `name` to `launcher` (`open`).
    ///
    /// The launcher is the platform's "open with default application" hook;
    /// it is injected so the library never spawns programs itself.
    pub fn open_file<F>(&mut self, name: &str, launcher: F) -> Result<PathBuf, FileError>
    where
        F: FnOnce(&Path) -> io::Result<()>,
    {
        self.tracked(format!("Open File: {}", name), |shell| {
            if !shell.storage().exists(name)? {
                return Err(FileError::NotFound(name.to_string()));
            }
            let path = shell.storage().resolve(name)?;
            launcher(&path)?;
            Ok(path)
        })
    }

    /// Lists the working directory. Not tracked.
    pub fn list(&self) -> Result<Vec<DirEntry>, FileError> {
        Ok(self.storage().list()?)
    }

    /// Lists every file below the working directory. Not tracked.
    pub fn list_recursive(&self) -> Result<Vec<DirEntry>, FileError> {
        Ok(self.storage().list_recursive()?)
    }
}
