//! Functions for printing shell state to the console.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use fileshell::memory::MemoryUsage;
use fileshell::process::ProcessRecord;
use fileshell::storage::{DirEntry, EntryKind};
use fileshell::utils::time::format_local;

/// 打印目录列表 (用于 list / ls)
pub fn print_listing(entries: &[DirEntry]) {
    if entries.is_empty() {
        println!("(empty)");
        return;
    }
    for entry in entries {
        match entry.kind {
            EntryKind::Directory => println!("[DIR]  {}", entry.name),
            EntryKind::File => println!("       {:<40} {:>10} B", entry.name, entry.size),
        }
    }
}

/// 打印文件内容，非 UTF-8 字节以替换字符显示
pub fn print_file_content(name: &str, content: &[u8]) {
    println!("--- Content of '{}' ---", name);
    let text = String::from_utf8_lossy(content);
    print!("{}", text);
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }
    println!("--- End of '{}' ---", name);
}

/// 打印内存使用情况 (meminfo)
pub fn print_memory_usage(usage: &MemoryUsage) {
    println!("--- Memory Information ---");
    println!("Total Memory: {} KB", usage.total_kb);
    println!("Used Memory : {} KB", usage.used_kb);
    println!("Free Memory : {} KB", usage.free_kb);
    println!();
    println!("Current Allocations:");
    if usage.entries.is_empty() {
        println!("  No memory allocations.");
    } else {
        for (name, size_kb) in &usage.entries {
            println!("  File: '{}' -> {} KB", name, size_kb);
        }
    }
    println!("--------------------------");
}

/// 打印进程队列 (procstatus)
pub fn print_process_table(records: &[ProcessRecord]) {
    if records.is_empty() {
        println!("No processes in the queue.");
        return;
    }
    println!("--- Process Queue Status ---");
    for record in records {
        let timing = match &record.finished_at {
            Some(finished) => format!(
                "finished {}, took {}",
                format_local(finished),
                format_elapsed(&record.submitted_at, finished)
            ),
            None => format!("submitted {}", format_local(&record.submitted_at)),
        };
        println!(
            "  [ID: {}] '{}' - {:<9} ({})",
            record.id,
            record.description,
            record.status.as_str(),
            timing
        );
    }
    println!("----------------------------");
}

/// 清空终端并把光标移到左上角
pub fn clear_screen() -> io::Result<()> {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush()
}

fn format_elapsed(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    let elapsed = end.signed_duration_since(*start);
    match elapsed.num_microseconds() {
        Some(us) if us < 1_000 => format!("{}us", us.max(0)),
        _ => format!("{}ms", elapsed.num_milliseconds()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_format_elapsed_units() {
        let start = Utc::now();
        assert_eq!(format_elapsed(&start, &(start + TimeDelta::microseconds(250))), "250us");
        assert_eq!(format_elapsed(&start, &(start + TimeDelta::milliseconds(42))), "42ms");
        assert_eq!(format_elapsed(&start, &start), "0us");
    }
}
