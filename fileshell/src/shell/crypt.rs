use std::io;

use tracing::{debug, info};

use super::{ErrorKind, Shell, io_error_kind};
use crate::crypto::{Algorithm, KeyError};
use crate::naming::{self, NamingError};

/// Defines errors that can occur while encrypting or decrypting a file.
//
// // 定义加密与解密文件时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum CryptError {
    /// The key is not valid for the chosen algorithm.
    //
    // // 密钥对所选算法无效。
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The input name does not carry the suffix of the chosen algorithm.
    //
    // // 输入文件名不带有所选算法的后缀。
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// The input file does not exist.
    //
    // // 输入文件不存在。
    #[error("File '{0}' does not exist.")]
    NotFound(String),

    /// The input file is empty or could not be read.
    //
    // // 输入文件为空或无法读取。
    #[error("File '{0}' is empty or could not be read.")]
    EmptyOrUnreadable(String),

    /// An I/O error occurred while writing the output.
    //
    // // 写入输出时发生 I/O 错误。
    #[error("File system error: {0}")]
    Io(#[from] io::Error),
}

impl CryptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptError::Key(_) => ErrorKind::InvalidKey,
            CryptError::Naming(_) => ErrorKind::AlreadyProcessed,
            CryptError::NotFound(_) => ErrorKind::NotFound,
            CryptError::EmptyOrUnreadable(_) => ErrorKind::EmptyOrUnreadable,
            CryptError::Io(e) => io_error_kind(e),
        }
    }
}

impl Shell {
    fn read_nonempty(&self, name: &str) -> Result<Vec<u8>, CryptError> {
        if !self.storage().exists(name)? {
            return Err(CryptError::NotFound(name.to_string()));
        }
        match self.storage().read_all(name) {
            Ok(content) if !content.is_empty() => Ok(content),
            Ok(_) => Err(CryptError::EmptyOrUnreadable(name.to_string())),
            Err(e) => {
                debug!(file = name, error = %e, "read failed");
                Err(CryptError::EmptyOrUnreadable(name.to_string()))
            }
        }
    }

    /// Encrypts `name` into `<base>_<algorithm>.enc`.
    ///
    /// The key is validated before the file is touched.
    pub fn encrypt_file(
        &mut self,
        algorithm: Algorithm,
        name: &str,
        key: &str,
    ) -> Result<String, CryptError> {
        self.tracked(format!("Encrypt File: {} ({})", name, algorithm), |shell| {
            let cipher = algorithm.cipher(key)?;
            let output = naming::encrypted_name(name, algorithm);

            let content = shell.read_nonempty(name)?;
            let encrypted = cipher.encrypt(&content);
            debug!(%algorithm, bytes = encrypted.len(), "encrypted");

            shell.storage().write_all(&output, &encrypted)?;
            info!(source = name, output = %output, %algorithm, "file encrypted");
            Ok(output)
        })
    }

    /// Decrypts a `*_<algorithm>.enc` file into `<stem>.dec.txt`.
    pub fn decrypt_file(
        &mut self,
        algorithm: Algorithm,
        name: &str,
        key: &str,
    ) -> Result<String, CryptError> {
        self.tracked(format!("Decrypt File: {} ({})", name, algorithm), |shell| {
            let output = naming::decrypted_name(name, algorithm)?;
            let cipher = algorithm.cipher(key)?;

            let content = shell.read_nonempty(name)?;
            let decrypted = cipher.decrypt(&content);
            debug!(%algorithm, bytes = decrypted.len(), "decrypted");

            shell.storage().write_all(&output, &decrypted)?;
            info!(source = name, output = %output, %algorithm, "file decrypted");
            Ok(output)
        })
    }
}
