//! Functions for user interaction, like multi-line content input.

use std::io::{self, BufRead, Write};

use fileshell::common::constants::WRITE_TERMINATOR;

/// 逐行读取用户输入，直到遇到单独一行 `EOF` 或输入结束。
///
/// 每一行都保留换行符；结束标记本身不写入内容。
pub fn read_until_terminator(name: &str) -> io::Result<String> {
    println!(
        "Enter content for '{}' (type '{}' on a new line to finish):",
        name, WRITE_TERMINATOR
    );
    io::stdout().flush()?;

    let stdin = io::stdin();
    collect_until_terminator(stdin.lock())
}

fn collect_until_terminator(mut reader: impl BufRead) -> io::Result<String> {
    let mut content = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == WRITE_TERMINATOR {
            break;
        }
        content.push_str(trimmed);
        content.push('\n');
    }
    Ok(content)
}
