//! ## Command
//!
//! smbclient command line builder

use std::fmt;
use std::path::{Path, PathBuf};

use super::SmbOptions;
use crate::utils::shell;

/// A command line to run, ready to be passed to the shell.
///
/// Every token in `args` is already quoted as the shell expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmbCommand {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
    /// index in `args` of the password token, masked when displayed
    secret: Option<usize>,
}

impl SmbCommand {
    /// Build the smbclient invocation which runs `<verb> <args>` on the share.
    ///
    /// The arguments are, in order:
    ///
    /// 1. `-U <username>`
    /// 2. `-N`, only if no password is set
    /// 3. `-c '<verb> <args>'`
    /// 4. `<address>`
    /// 5. `<password>`, only if set
    /// 6. `-W <domain>`, only if set
    /// 7. `-p <port>`, only if set
    pub fn smbclient<P: AsRef<Path>>(
        options: &SmbOptions,
        verb: &str,
        args: &str,
        workdir: P,
    ) -> Self {
        let mut argv = vec![String::from("-U"), shell::wrap(&options.username)];
        if options.password.is_none() {
            argv.push(String::from("-N"));
        }
        argv.push(String::from("-c"));
        argv.push(shell::wrap(format!("{} {}", verb, args)));
        argv.push(shell::wrap(&options.address));
        let mut secret = None;
        if let Some(password) = options.password.as_deref() {
            secret = Some(argv.len());
            argv.push(shell::wrap(password));
        }
        if let Some(domain) = options.domain.as_deref() {
            argv.push(String::from("-W"));
            argv.push(shell::wrap(domain));
        }
        if let Some(port) = options.port {
            argv.push(String::from("-p"));
            argv.push(port.to_string());
        }
        Self {
            program: options.smbclient.clone(),
            args: argv,
            workdir: workdir.as_ref().to_path_buf(),
            secret,
        }
    }

    /// Build the smbtree invocation which enumerates the shares, as anonymous guest
    pub fn smbtree(options: &SmbOptions) -> Self {
        Self {
            program: options.smbtree.clone(),
            args: vec![
                String::from("-U"),
                String::from("guest"),
                String::from("-N"),
            ],
            workdir: options.workdir.clone(),
            secret: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Directory the command runs from
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The full command line to pass to the shell
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in self.args.iter() {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for SmbCommand {
    /// Display the command line with the password masked
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for (i, arg) in self.args.iter().enumerate() {
            match self.secret {
                Some(secret) if secret == i => write!(f, " ****")?,
                _ => write!(f, " {}", arg)?,
            }
        }
        Ok(())
    }
}
