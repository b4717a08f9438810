//! ## Runner
//!
//! Runs command lines as child processes

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Output of a terminated process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` if the process was killed by a signal
    pub status: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Output of a process which exited with `0`
    pub fn ok<S: AsRef<str>>(stdout: S) -> Self {
        Self {
            status: Some(0),
            success: true,
            stdout: stdout.as_ref().to_string(),
            stderr: String::new(),
        }
    }

    /// Output of a process which exited with `status`
    pub fn failed<S: AsRef<str>>(status: i32, stdout: S, stderr: S) -> Self {
        Self {
            status: Some(status),
            success: status == 0,
            stdout: stdout.as_ref().to_string(),
            stderr: stderr.as_ref().to_string(),
        }
    }

    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        let mut output = String::with_capacity(self.stdout.len() + self.stderr.len());
        output.push_str(&self.stdout);
        output.push_str(&self.stderr);
        output
    }
}

/// Runs a command line from a working directory and waits for it to terminate
pub trait CommandRunner: Send + Sync {
    /// Run `line` from `workdir`.
    ///
    /// Fails only if the process couldn't be run at all; a nonzero exit is reported in the output.
    fn run(&self, line: &str, workdir: &Path) -> io::Result<ProcessOutput>;
}

/// Runs command lines through `sh -c`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: String::from("sh"),
        }
    }
}

impl ShellRunner {
    /// Use `shell` instead of `sh`. It must accept `-c <line>`
    pub fn new<S: AsRef<str>>(shell: S) -> Self {
        Self {
            shell: shell.as_ref().to_string(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, line: &str, workdir: &Path) -> io::Result<ProcessOutput> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(line)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        Ok(ProcessOutput {
            status: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
#[cfg(target_family = "unix")]
mod test {

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_combine_output() {
        let output = ProcessOutput::failed(1, "out\n", "err\n");
        assert_eq!(output.combined(), "out\nerr\n");
        assert!(!output.success);
    }

    #[test]
    fn should_run_command_line() {
        let tmp = TempDir::new().unwrap();
        let output = ShellRunner::default()
            .run("echo 'hello world'; echo oops >&2", tmp.path())
            .unwrap();
        assert!(output.success);
        assert_eq!(output.status, Some(0));
        assert_eq!(output.stdout, "hello world\n");
        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn should_run_from_workdir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "test data\n").unwrap();
        let output = ShellRunner::default().run("cat a.txt", tmp.path()).unwrap();
        assert_eq!(output.stdout, "test data\n");
    }

    #[test]
    fn should_report_exit_code() {
        let tmp = TempDir::new().unwrap();
        let output = ShellRunner::default().run("exit 3", tmp.path()).unwrap();
        assert!(!output.success);
        assert_eq!(output.status, Some(3));
    }

    #[test]
    fn should_fail_when_shell_is_missing() {
        let tmp = TempDir::new().unwrap();
        assert!(ShellRunner::new("/this/shell/does/not/exist")
            .run("true", tmp.path())
            .is_err());
    }

    #[test]
    fn should_fail_when_workdir_is_missing() {
        assert!(ShellRunner::default()
            .run("true", Path::new("/this/dir/does/not/exist"))
            .is_err());
    }
}
