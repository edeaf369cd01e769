use std::io;

use tracing::info;

use super::{ErrorKind, Shell, io_error_kind};
use crate::memory::AllocError;
use crate::utils::path::normalize_entry_name;

/// Defines errors that can occur during `alloc` and `dealloc`.
//
// // 定义 `alloc` 与 `dealloc` 中可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The file to account memory for does not exist.
    //
    // // 要分配内存的文件不存在。
    #[error("File '{0}' does not exist.")]
    NotFound(String),

    /// The ledger refused the request.
    //
    // // 账本拒绝了该请求。
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// An I/O error occurred while checking the file.
    //
    // // 检查文件时发生 I/O 错误。
    #[error("File system error: {0}")]
    Io(#[from] io::Error),
}

impl MemoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoryError::NotFound(_) => ErrorKind::NotFound,
            MemoryError::Alloc(AllocError::Duplicate(_)) => ErrorKind::DuplicateAllocation,
            MemoryError::Alloc(AllocError::InvalidSize(_)) => ErrorKind::InvalidArgument,
            MemoryError::Alloc(AllocError::CapacityExceeded { .. }) => ErrorKind::CapacityExceeded,
            MemoryError::Io(e) => io_error_kind(e),
        }
    }
}

impl Shell {
    /// Reserves `size_kb` of simulated memory for an existing file (`alloc`).
    pub fn allocate(&mut self, name: &str, size_kb: i64) -> Result<(), MemoryError> {
        self.tracked(
            format!("Allocate Memory: {} ({}KB)", name, size_kb),
            |shell| {
                if !shell.storage().exists(name)? {
                    return Err(MemoryError::NotFound(name.to_string()));
                }
                shell.ledger.allocate(&normalize_entry_name(name), size_kb)?;
                info!(file = name, size_kb, used_kb = shell.ledger.used_kb(), "memory allocated");
                Ok(())
            },
        )
    }

    /// Releases the reservation of an existing file (`dealloc`).
    ///
    /// Returns the released size, or `None` when the file had none.
    pub fn deallocate(&mut self, name: &str) -> Result<Option<u64>, MemoryError> {
        self.tracked(format!("Deallocate Memory: {}", name), |shell| {
            if !shell.storage().exists(name)? {
                return Err(MemoryError::NotFound(name.to_string()));
            }
            let released = shell.ledger.deallocate(&normalize_entry_name(name));
            info!(file = name, ?released, "memory deallocated");
            Ok(released)
        })
    }
}
