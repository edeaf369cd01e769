pub mod codec;
pub mod common;
pub mod crypto;
pub mod memory;
pub mod naming;
pub mod process;
pub mod shell;
pub mod storage;
pub mod utils;

pub use shell::{ErrorKind, Shell, ShellConfig};
