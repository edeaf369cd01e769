use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::handlers;
use crate::repl::state::AppState;

/// REPL 命令处理器
pub fn handle_repl_command(command: ReplCommand, app_state: &mut AppState) -> Result<(), CliError> {
    let shell = &mut app_state.shell;

    match command {
        // --- 文件操作 ---
        ReplCommand::List { recursive } => handlers::files::handle_list(shell, recursive)?,
        ReplCommand::Mkdir { name } => handlers::files::handle_mkdir(shell, &name)?,
        ReplCommand::Rm { name } => handlers::files::handle_remove(shell, &name)?,
        ReplCommand::Add { local_path } => handlers::files::handle_add(shell, &local_path)?,
        ReplCommand::Touch { name } => handlers::files::handle_touch(shell, &name)?,
        ReplCommand::Read { name } => handlers::files::handle_read(shell, &name)?,
        ReplCommand::Write { name } => handlers::files::handle_write(shell, &name)?,
        ReplCommand::Open { name } => handlers::open::handle_open(shell, &name)?,

        // --- 压缩与加密 ---
        ReplCommand::Compress { name } => handlers::compress::handle_compress(shell, &name)?,
        ReplCommand::Decompress { name } => handlers::compress::handle_decompress(shell, &name)?,
        ReplCommand::Encrypt {
            algorithm,
            name,
            key,
        } => handlers::crypt::handle_encrypt(shell, algorithm, &name, &key)?,
        ReplCommand::Decrypt {
            algorithm,
            name,
            key,
        } => handlers::crypt::handle_decrypt(shell, algorithm, &name, &key)?,

        // --- 模拟内存 ---
        ReplCommand::Alloc { name, size_kb } => {
            handlers::memory::handle_alloc(shell, &name, size_kb)?
        }
        ReplCommand::Dealloc { name } => handlers::memory::handle_dealloc(shell, &name)?,
        ReplCommand::Meminfo => crate::ui::printer::print_memory_usage(&shell.memory_usage()),

        // --- 进程记录 ---
        ReplCommand::Procstatus => crate::ui::printer::print_process_table(shell.processes()),
        ReplCommand::Clearcp => handlers::process::handle_clear_completed(shell),
        ReplCommand::Clearp { status } => handlers::process::handle_clear_by_status(shell, status),
        ReplCommand::Clearallp => handlers::process::handle_clear_all(shell),

        // --- 控制台 ---
        ReplCommand::Clear => crate::ui::printer::clear_screen()?,
        ReplCommand::Exit => {
            app_state.running = false;
        }
    }
    Ok(())
}
