use fileshell::Shell;

use crate::errors::CliError;

pub fn handle_open(shell: &mut Shell, name: &str) -> Result<(), CliError> {
    // opener 使用系统默认程序打开文件
    let path = shell.open_file(name, |path| opener::open(path).map_err(std::io::Error::other))?;
    println!("Opened '{}' ({}).", name, path.display());
    Ok(())
}
