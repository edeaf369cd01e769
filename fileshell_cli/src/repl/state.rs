use std::path::PathBuf;

use fileshell::Shell;

pub struct AppState {
    pub shell: Shell,
    /// 工作目录，用于提示符与历史文件的相对路径
    pub working_dir: PathBuf,
    /// `exit` 命令将其置为 false
    pub running: bool,
}
