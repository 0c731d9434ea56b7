use std::process::{Command, Stdio};
use tracing::{error, info};

/// Launch the configured task-manager command as a detached child.
///
/// The command string is whitespace-split into program + arguments. The
/// child's stdio is nulled so it cannot scribble on the panel's terminal.
/// Failure to locate or start the program is logged and otherwise ignored —
/// it never reaches the sampling or rendering state.
pub fn launch(command: &str) {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        error!("task_manager command is empty");
        return;
    };

    match Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => info!("launched '{program}' (pid {})", child.id()),
        Err(e) => error!("failed to launch '{command}': {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_harmless() {
        launch("");
        launch("   ");
    }

    #[test]
    fn missing_program_is_harmless() {
        launch("cpugraph-test-no-such-program --flag");
    }

    #[test]
    fn spawns_program_with_arguments() {
        // `true` exits immediately; we only care that spawn succeeds.
        launch("true --ignored-arg");
    }
}
