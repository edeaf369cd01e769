//! The orchestrator.
//!
//! [`Shell`] owns the storage backend, the allocation ledger and the process
//! tracker. Every user-visible operation is a method that validates its
//! inputs, runs the codec or cipher, writes the result through the backend
//! and records the outcome as a process record.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::memory::{AllocationLedger, MemoryUsage};
use crate::process::{ProcessRecord, ProcessStatus, ProcessTracker};
use crate::storage::StorageBackend;
use crate::storage::local::LocalStorage;

mod compress;
pub mod config;
mod crypt;
mod files;
mod memory;

pub use compress::CompressError;
pub use config::{ConfigError, ShellConfig};
pub use crypt::CryptError;
pub use files::{FileError, RemoveReport};
pub use memory::MemoryError;

/// Coarse classification shared by every operation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    /// A file naming convention was violated.
    AlreadyProcessed,
    InvalidKey,
    CorruptData,
    EmptyOrUnreadable,
    CapacityExceeded,
    DuplicateAllocation,
    InvalidArgument,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classifies a raw I/O error.
pub(crate) fn io_error_kind(error: &io::Error) -> ErrorKind {
    match error.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
        io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
        _ => ErrorKind::Io,
    }
}

/// Errors raised while setting up a shell.
//
// // 创建 shell 时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The working directory does not exist or is not a directory.
    //
    // // 工作目录不存在或不是一个目录。
    #[error("Working directory does not exist or is not a directory: {0:?}")]
    PathNotFound(PathBuf),

    /// The configuration is not usable.
    //
    // // 配置无效。
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// 代表一个正在运行的 shell 会话。
pub struct Shell {
    /// 会话配置
    pub config: ShellConfig,
    storage: Box<dyn StorageBackend>,
    ledger: AllocationLedger,
    processes: ProcessTracker,
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("config", &self.config)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl Shell {
    /// Builds a shell over any storage backend.
    pub fn new(config: ShellConfig, storage: Box<dyn StorageBackend>) -> Result<Self, OpenError> {
        config.validate()?;
        Ok(Self {
            ledger: AllocationLedger::new(config.total_memory_kb),
            processes: ProcessTracker::new(),
            config,
            storage,
        })
    }

    /// Builds a shell that manages the local directory `root`.
    pub fn open_local(root: &Path, config: ShellConfig) -> Result<Self, OpenError> {
        if !root.is_dir() {
            return Err(OpenError::PathNotFound(root.to_path_buf()));
        }
        debug!(root = ?root, total_memory_kb = config.total_memory_kb, "opening shell");
        Self::new(config, Box::new(LocalStorage::new(root)))
    }

    pub(crate) fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Runs `op` as a tracked process.
    ///
    /// A `Pending` record is submitted first, moved to `Running` while `op`
    /// executes, then finished as `Completed` or `Failed`.
    pub(crate) fn tracked<T, E: fmt::Display>(
        &mut self,
        description: String,
        op: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let id = self.processes.submit(description.as_str());
        self.processes.set_status(id, ProcessStatus::Running);

        let result = op(self);
        let status = match &result {
            Ok(_) => {
                debug!(id, %description, "process completed");
                ProcessStatus::Completed
            }
            Err(e) => {
                debug!(id, %description, error = %e, "process failed");
                ProcessStatus::Failed
            }
        };
        self.processes.set_status(id, status);
        result
    }

    // --- 进程记录 ---

    /// All process records in submission order.
    pub fn processes(&self) -> &[ProcessRecord] {
        self.processes.list_all()
    }

    pub fn process(&self, id: u64) -> Option<&ProcessRecord> {
        self.processes.get(id)
    }

    /// Removes every record with `status`; returns how many were removed.
    pub fn clear_processes(&mut self, status: ProcessStatus) -> usize {
        self.processes.clear_by_status(status)
    }

    /// Removes every record. Ids are not reused.
    pub fn clear_all_processes(&mut self) -> usize {
        self.processes.clear_all()
    }

    // --- 内存账本 ---

    pub fn memory_usage(&self) -> MemoryUsage {
        self.ledger.usage()
    }

    pub fn has_allocation(&self, name: &str) -> bool {
        self.ledger
            .has_allocation(&crate::utils::path::normalize_entry_name(name))
    }
}
