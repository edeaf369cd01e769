use fileshell::Shell;
use fileshell::process::ProcessStatus;

pub fn handle_clear_completed(shell: &mut Shell) {
    let removed = shell.clear_processes(ProcessStatus::Completed);
    println!("Cleared all completed processes ({} removed).", removed);
}

pub fn handle_clear_by_status(shell: &mut Shell, status: ProcessStatus) {
    let removed = shell.clear_processes(status);
    println!("Cleared {} process(es) with status {}.", removed, status);
}

pub fn handle_clear_all(shell: &mut Shell) {
    let removed = shell.clear_all_processes();
    println!("Cleared all processes from the queue ({} removed).", removed);
}
