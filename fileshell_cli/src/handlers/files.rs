use std::path::Path;

use fileshell::Shell;
use fileshell::storage::EntryKind;

use crate::errors::CliError;
use crate::ui::{printer, prompt};

pub fn handle_list(shell: &Shell, recursive: bool) -> Result<(), CliError> {
    let entries = if recursive {
        shell.list_recursive()?
    } else {
        shell.list()?
    };
    printer::print_listing(&entries);
    Ok(())
}

pub fn handle_mkdir(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    shell.make_directory(name)?;
    println!("Directory '{}' created.", name);
    Ok(())
}

pub fn handle_remove(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    let report = shell.remove(name)?;
    for (released, size_kb) in &report.released {
        println!(
            "Memory allocated for '{}' has been deallocated ({} KB).",
            released, size_kb
        );
    }
    match report.kind {
        EntryKind::Directory => println!("Directory '{}' removed.", name),
        EntryKind::File => println!("File '{}' removed.", name),
    }
    Ok(())
}

pub fn handle_add(shell: &mut Shell, local_path: &Path) -> Result<(), CliError> {
    let name = shell.add_file(local_path)?;
    println!("File '{}' added successfully to working directory.", name);
    Ok(())
}

pub fn handle_touch(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    shell.create_file(name)?;
    println!("File created: '{}'", name);
    Ok(())
}

pub fn handle_read(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    let content = shell.read_file(name)?;
    printer::print_file_content(name, &content);
    Ok(())
}

pub fn handle_write(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    // 只有目标文件存在时才提示用户输入内容
    shell.write_file_with(name, || {
        prompt::read_until_terminator(name).map(String::into_bytes)
    })?;
    println!("Content written to '{}'.", name);
    Ok(())
}
