use fileshell::Shell;

use crate::errors::CliError;

pub fn handle_alloc(shell: &mut Shell, name: &str, size_kb: i64) -> Result<(), CliError> {
    shell.allocate(name, size_kb)?;
    println!("Allocated {}KB to '{}'.", size_kb, name);
    Ok(())
}

pub fn handle_dealloc(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    match shell.deallocate(name)? {
        Some(size_kb) => println!(
            "Memory allocated for '{}' has been deallocated ({} KB).",
            name, size_kb
        ),
        None => println!("No memory was allocated for '{}'.", name),
    }
    Ok(())
}
