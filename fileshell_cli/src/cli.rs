use std::path::PathBuf;

use clap::Parser;
use fileshell::crypto::Algorithm;
use fileshell::process::ProcessStatus;

#[derive(Parser, Debug)]
#[command(name = "fileshell", author, version, about = "An interactive file management shell", long_about = None)]
pub struct Cli {
    /// 由 shell 管理的工作目录 (默认为当前目录)
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// 配置文件路径 (默认为工作目录下的 fileshell.json)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 覆盖配置中的模拟内存总量
    #[arg(long = "memory-kb", value_name = "KB")]
    pub memory_kb: Option<u64>,

    /// 输出调试日志
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// 关闭所有日志
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

const ALGORITHM_HELP: &str = "Available algorithms:\n  1: caesar\n  2: xor\n  3: vigenere\n  4: railfence";

// --- REPL (交互式) 命令定义 ---
#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "REPL commands", after_help = ALGORITHM_HELP)]
pub enum ReplCommand {
    /// 列出工作目录中的文件和目录
    #[command(visible_alias = "ls")]
    List {
        /// 递归列出所有子目录中的文件
        #[arg(short = 'r', long = "recursive")]
        recursive: bool,
    },
    /// 创建一个新目录
    Mkdir {
        #[arg(value_name = "DIR")]
        name: String,
    },
    /// 删除一个文件或目录 (目录会被递归删除)
    Rm {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// 将外部文件复制到工作目录
    Add {
        #[arg(value_name = "FILEPATH")]
        local_path: PathBuf,
    },
    /// 创建一个新的空文件
    Touch {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 读取并显示文件内容
    Read {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 向已存在的文件写入内容 (逐行输入，以单独一行 EOF 结束)
    Write {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 使用系统默认程序打开文件
    Open {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 使用 RLE 压缩文本文件
    Compress {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 解压一个 RLE 压缩文件
    Decompress {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 使用指定算法加密文件
    Encrypt {
        /// 算法名称或编号
        #[arg(value_name = "ALGO")]
        algorithm: Algorithm,
        #[arg(value_name = "FILE")]
        name: String,
        #[arg(value_name = "KEY", allow_hyphen_values = true)]
        key: String,
    },
    /// 使用指定算法解密文件
    Decrypt {
        /// 算法名称或编号
        #[arg(value_name = "ALGO")]
        algorithm: Algorithm,
        #[arg(value_name = "FILE")]
        name: String,
        #[arg(value_name = "KEY", allow_hyphen_values = true)]
        key: String,
    },
    /// 为已存在的文件分配模拟内存
    Alloc {
        #[arg(value_name = "FILE")]
        name: String,
        #[arg(value_name = "SIZE_KB", allow_negative_numbers = true)]
        size_kb: i64,
    },
    /// 释放已存在文件的模拟内存
    Dealloc {
        #[arg(value_name = "FILE")]
        name: String,
    },
    /// 显示内存使用情况与分配列表
    Meminfo,
    /// 显示进程队列状态
    Procstatus,
    /// 清除所有已完成的进程记录
    Clearcp,
    /// 清除指定状态的进程记录
    Clearp {
        /// pending, running, completed 或 failed
        #[arg(value_name = "STATUS")]
        status: ProcessStatus,
    },
    /// 清除所有进程记录
    Clearallp,
    /// 清空控制台
    Clear,
    /// 退出 shell
    #[command(visible_alias = "quit")]
    Exit,
}
