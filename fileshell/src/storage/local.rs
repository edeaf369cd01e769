use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use super::{DirEntry, EntryKind, StorageBackend};
use crate::utils::path::normalize_entry_name;

/// 基于本地文件系统的存储后端实现
#[derive(Debug)]
pub struct LocalStorage {
    /// 工作目录
    root_path: PathBuf,
}

impl LocalStorage {
    pub fn new(root_path: &Path) -> Self {
        Self {
            root_path: root_path.to_path_buf(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Maps a user-supplied name to a path under the root.
    fn path_of(&self, name: &str) -> io::Result<PathBuf> {
        let invalid = |reason: &str| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid name '{}': {}", name, reason),
            )
        };

        let raw = Path::new(name);
        if raw.is_absolute() || raw.has_root() {
            return Err(invalid("absolute paths are not allowed"));
        }
        if raw.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(invalid("'..' is not allowed"));
        }
        let normalized = normalize_entry_name(name);
        if normalized.is_empty() {
            return Err(invalid("name is empty"));
        }
        Ok(self.root_path.join(normalized))
    }

    fn relative_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root_path).unwrap_or(path);
        normalize_entry_name(&relative.to_string_lossy())
    }

    fn entry_for(&self, path: &Path, metadata: &fs::Metadata) -> DirEntry {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        DirEntry {
            name: self.relative_name(path),
            kind,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
        }
    }
}

impl StorageBackend for LocalStorage {
    fn exists(&self, name: &str) -> io::Result<bool> {
        Ok(self.path_of(name)?.exists())
    }

    fn is_dir(&self, name: &str) -> io::Result<bool> {
        Ok(self.path_of(name)?.is_dir())
    }

    fn read_all(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path_of(name)?)
    }

    fn list(&self) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root_path)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            entries.push(self.entry_for(&entry.path(), &metadata));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn list_recursive(&self) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root_path).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_file() {
                let metadata = entry.metadata().map_err(io::Error::other)?;
                entries.push(self.entry_for(entry.path(), &metadata));
            }
        }
        Ok(entries)
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        self.path_of(name)
    }

    fn write_with(
        &self,
        name: &str,
        fill: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>,
    ) -> io::Result<()> {
        let target = self.path_of(name)?;
        let parent = target.parent().unwrap_or(&self.root_path);

        // 1. 在目标所在目录中创建临时文件，保证 persist 是同一文件系统上的 rename
        let temp_file = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(temp_file);
        fill(&mut writer)?;
        let temp_file = writer.into_inner().map_err(|e| e.into_error())?;

        // 2. 覆盖已有文件时保留其权限
        if let Ok(metadata) = fs::metadata(&target) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
        }

        // 3. 原子重命名；失败时临时文件随 drop 删除
        temp_file.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }

    fn create_new(&self, name: &str) -> io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path_of(name)?)?;
        Ok(())
    }

    fn create_dir(&self, name: &str) -> io::Result<()> {
        fs::create_dir(self.path_of(name)?)
    }

    fn copy_in(&self, source: &Path) -> io::Result<String> {
        let file_name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Source path has no file name: {:?}", source),
            )
        })?;
        let name = file_name.to_string_lossy().to_string();
        let destination = self.path_of(&name)?;
        // 源文件已在工作目录中时，fs::copy 会把它截断
        if fs::canonicalize(source)? == fs::canonicalize(&destination).unwrap_or_default() {
            return Ok(name);
        }
        fs::copy(source, destination)?;
        Ok(name)
    }

    fn remove(&self, name: &str) -> io::Result<EntryKind> {
        let path = self.path_of(name)?;
        if path.is_dir() {
            fs::remove_dir_all(path)?;
            Ok(EntryKind::Directory)
        } else {
            fs::remove_file(path)?;
            Ok(EntryKind::File)
        }
    }
}
