pub mod local;

use std::fmt::Debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Whether a directory entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name relative to the storage root, `/`-separated.
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes; `0` for directories.
    pub size: u64,
}

/// 存储后端特征
/// 定义了 shell 需要的全部文件系统操作，解耦了业务逻辑与物理存储。
///
/// All names are relative to the backend's root. Implementations reject
/// names that would escape it.
pub trait StorageBackend: Debug {
    // --- 读操作 ---

    /// Checks whether `name` exists.
    fn exists(&self, name: &str) -> io::Result<bool>;

    /// Checks whether `name` is a directory.
    fn is_dir(&self, name: &str) -> io::Result<bool>;

    /// Reads the whole content of a file.
    fn read_all(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Lists the entries directly under the root, sorted by name.
    fn list(&self) -> io::Result<Vec<DirEntry>>;

    /// Lists every file below the root, recursively, sorted by name.
    fn list_recursive(&self) -> io::Result<Vec<DirEntry>>;

    /// Absolute path of `name`, for handing to external programs.
    fn resolve(&self, name: &str) -> io::Result<PathBuf>;

    // --- 写操作 ---

    /// Truncates or creates `name` with whatever `fill` writes.
    ///
    /// The output is staged; the target only changes once `fill` returns
    /// `Ok`. On error the target is left untouched.
    fn write_with(
        &self,
        name: &str,
        fill: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
    ) -> io::Result<()>;

    /// Truncates or creates `name` with `data`.
    fn write_all(&self, name: &str, data: &[u8]) -> io::Result<()> {
        self.write_with(name, &mut |out| out.write_all(data))
    }

    /// Creates an empty file. Fails if `name` already exists.
    fn create_new(&self, name: &str) -> io::Result<()>;

    /// Creates a single directory. Fails if `name` already exists.
    fn create_dir(&self, name: &str) -> io::Result<()>;

    /// Copies an external file into the root under its own file name,
    /// overwriting. Returns the name it was stored under.
    fn copy_in(&self, source: &Path) -> io::Result<String>;

    // --- 删除操作 ---

    /// Removes a file, or a directory with everything in it.
    fn remove(&self, name: &str) -> io::Result<EntryKind>;
}
