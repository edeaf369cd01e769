use fileshell::Shell;

use crate::errors::CliError;

pub fn handle_compress(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    let output = shell.compress_file(name)?;
    println!("File compressed to: {}", output);
    Ok(())
}

pub fn handle_decompress(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    let output = shell.decompress_file(name)?;
    println!("File decompressed to: {}", output);
    Ok(())
}
