#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fileshell::{Shell, ShellConfig};
use tempfile::TempDir;

/// 辅助函数：在临时目录下创建工作目录并打开一个默认配置的 shell。
///
/// 返回 `(工作目录, Shell)`，测试既能直接检查文件系统，又能调用 shell 操作。
pub fn setup_shell(dir: &TempDir) -> (PathBuf, Shell) {
    setup_shell_with_capacity(dir, ShellConfig::default().total_memory_kb)
}

/// 辅助函数：创建一个指定内存容量的 shell。
pub fn setup_shell_with_capacity(dir: &TempDir, total_memory_kb: u64) -> (PathBuf, Shell) {
    let work_dir = dir.path().join("work");
    fs::create_dir_all(&work_dir).unwrap();
    let config = ShellConfig {
        total_memory_kb,
        ..ShellConfig::default()
    };
    let shell = Shell::open_local(&work_dir, config).unwrap();
    (work_dir, shell)
}

/// 辅助函数：在指定目录中创建一个具有特定内容的虚拟文件。
pub fn create_dummy_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let file_path = dir.join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
