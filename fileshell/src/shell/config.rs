use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::constants::{CONFIG_FILE_NAME, DEFAULT_TOTAL_MEMORY_KB};

/// Defines errors that can occur while loading the shell configuration.
//
// // 定义加载 shell 配置时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    //
    // // 无法读取配置文件。
    #[error("Failed to read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`ShellConfig`].
    //
    // // 配置文件不是合法的 JSON。
    #[error("Failed to parse configuration file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The memory capacity is zero.
    //
    // // 内存容量为零。
    #[error("Total memory must be positive, got {0} KB")]
    InvalidCapacity(u64),
}

/// 代表 `fileshell.json` 配置文件的顶层结构。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// 内存账本的总容量 (KB)
    pub total_memory_kb: u64,
    /// REPL 历史记录文件，未设置时不保存历史
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            total_memory_kb: DEFAULT_TOTAL_MEMORY_KB,
            history_file: None,
        }
    }
}

impl ShellConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ShellConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `explicit` if given, else `fileshell.json` in `working_dir` if it
    /// exists, else the defaults.
    pub fn discover(working_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_memory_kb == 0 {
            return Err(ConfigError::InvalidCapacity(self.total_memory_kb));
        }
        Ok(())
    }
}
