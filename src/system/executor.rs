// src/system/executor.rs

use std::process::Command;

/// Executes one command line through the operating system shell and reports
/// whether it exited with status zero.
///
/// The string is handed to `sh -c` (or `cmd /C` on Windows) verbatim, so the
/// full feature set of the shell — pipes, redirection, globbing, spawning
/// further processes — is available to it. The configuration file author is
/// trusted; nothing is sanitized or sandboxed here.
///
/// The call blocks until the command exits; there is no timeout. A command
/// that never returns suspends the whole run.
///
/// With `dry_run` set, nothing is invoked and the command is reported as
/// successful.
pub fn execute_command(command_line: &str, dry_run: bool) -> bool {
    if dry_run {
        log::debug!("Dry run, skipping: {}", command_line);
        return true;
    }

    let status = shell_command(command_line).status();
    match status {
        Ok(status) => {
            log::debug!("Command '{}' exited with {}", command_line, status);
            status.success()
        }
        Err(e) => {
            log::warn!("Command '{}' could not be spawned: {}", command_line, e);
            false
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(target_os = "windows")]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        assert!(execute_command("exit 0", false));
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        assert!(!execute_command("exit 1", false));
    }

    #[test]
    #[cfg(unix)]
    fn test_shell_semantics_are_available() {
        // A pipeline only works if a real shell interprets the line.
        assert!(execute_command("echo hello | grep -q hello", false));
    }

    #[test]
    fn test_dry_run_never_invokes_anything() {
        assert!(execute_command("exit 1", true));
        assert!(execute_command("definitely-not-a-command --x", true));
        assert!(execute_command("this is ( not even valid shell", true));
    }
}
