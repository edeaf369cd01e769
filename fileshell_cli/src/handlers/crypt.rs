use fileshell::Shell;
use fileshell::crypto::Algorithm;

use crate::errors::CliError;

pub fn handle_encrypt(
    shell: &mut Shell,
    algorithm: Algorithm,
    name: &str,
    key: &str,
) -> Result<(), CliError> {
    println!("Encrypting '{}' using {}...", name, algorithm);
    let output = shell.encrypt_file(algorithm, name, key)?;
    println!("File encrypted to: {}", output);
    Ok(())
}

pub fn handle_decrypt(
    shell: &mut Shell,
    algorithm: Algorithm,
    name: &str,
    key: &str,
) -> Result<(), CliError> {
    println!("Decrypting '{}' using {}...", name, algorithm);
    let output = shell.decrypt_file(algorithm, name, key)?;
    println!("File decrypted successfully to: {}", output);
    Ok(())
}
