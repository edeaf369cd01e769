use std::io;

use tracing::{debug, info};

use super::{ErrorKind, Shell, io_error_kind};
use crate::codec::{self, RleError};
use crate::naming::{self, NamingError};

/// Defines errors that can occur while compressing or decompressing a file.
//
// // 定义压缩与解压文件时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    /// The input name breaks the compression naming convention.
    //
    // // 输入文件名违反压缩命名约定。
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// The input file does not exist.
    //
    // // 输入文件不存在。
    #[error("File '{0}' does not exist.")]
    NotFound(String),

    /// The compressed content cannot be decoded.
    //
    // // 压缩内容无法解码。
    #[error("Corrupt compressed data: {0}")]
    Corrupt(#[from] RleError),

    /// An I/O error occurred while reading the input or writing the output.
    //
    // // 读取输入或写入输出时发生 I/O 错误。
    #[error("File system error: {0}")]
    Io(#[from] io::Error),
}

impl CompressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompressError::Naming(_) => ErrorKind::AlreadyProcessed,
            CompressError::NotFound(_) => ErrorKind::NotFound,
            CompressError::Corrupt(_) => ErrorKind::CorruptData,
            CompressError::Io(e) => io_error_kind(e),
        }
    }
}

impl Shell {
    /// Run-length encodes `name` into `<base>_compressed.txt`.
    ///
    /// Returns the name of the produced file.
    pub fn compress_file(&mut self, name: &str) -> Result<String, CompressError> {
        self.tracked(format!("Compress File: {}", name), |shell| {
            let output = naming::compressed_name(name)?;
            if !shell.storage().exists(name)? {
                return Err(CompressError::NotFound(name.to_string()));
            }

            let content = shell.storage().read_all(name)?;
            let encoded = codec::compress(&content);
            debug!(input = content.len(), output = encoded.len(), "rle encoded");

            shell.storage().write_all(&output, &encoded)?;
            info!(source = name, output = %output, "file compressed");
            Ok(output)
        })
    }

    /// Decodes a `*_compressed.txt` file into `<stem>_decompressed.txt`.
    ///
    /// Nothing is written when the content is corrupt. The expansion is
    /// streamed to the staged output, so large counts never sit in memory.
    pub fn decompress_file(&mut self, name: &str) -> Result<String, CompressError> {
        self.tracked(format!("Decompress File: {}", name), |shell| {
            let output = naming::decompressed_name(name)?;
            if !shell.storage().exists(name)? {
                return Err(CompressError::NotFound(name.to_string()));
            }

            let content = shell.storage().read_all(name)?;
            // 先完整校验，损坏的数据不会产生任何输出
            let runs = codec::parse_runs(&content)?;

            let mut written = 0;
            shell.storage().write_with(&output, &mut |out| {
                written = codec::expand_into(&runs, out)?;
                Ok(())
            })?;
            debug!(input = content.len(), output = written, "rle decoded");
            info!(source = name, output = %output, "file decompressed");
            Ok(output)
        })
    }
}
