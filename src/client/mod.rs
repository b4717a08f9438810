//! # client
//!
//! Smb client driving the samba command line tools

mod command;
mod options;
mod runner;

use std::path::{Path, PathBuf};

pub use command::SmbCommand;
pub use options::SmbOptions;
use remotefs::{RemoteError, RemoteErrorType, RemoteResult};
pub use runner::{CommandRunner, ProcessOutput, ShellRunner};

use crate::utils::{parser, path as path_utils, shell};

/// SMB client.
///
/// Each operation runs one `smbclient` process and waits for it to terminate.
/// The client holds no state besides its options, so it can be shared between threads.
pub struct SambaClient {
    options: SmbOptions,
    runner: Box<dyn CommandRunner>,
}

impl SambaClient {
    /// Create a new `SambaClient`, running the tools through `sh`.
    /// No connection is made until an operation is called.
    pub fn new(options: SmbOptions) -> Self {
        Self::with_runner(options, ShellRunner::default())
    }

    /// Create a new `SambaClient` which runs its command lines with `runner`
    pub fn with_runner<R: CommandRunner + 'static>(options: SmbOptions, runner: R) -> Self {
        Self {
            options,
            runner: Box::new(runner),
        }
    }

    /// Return a reference to the session options
    pub fn options(&self) -> &SmbOptions {
        &self.options
    }

    /// Build the smbclient command running `<verb> <args>` from the configured working directory
    pub fn command(&self, verb: &str, args: &str) -> SmbCommand {
        SmbCommand::smbclient(&self.options, verb, args, &self.options.workdir)
    }

    /// Download `path` from the share to the local file `destination`.
    ///
    /// ```rust,no_run
    /// # use samba_client::{SambaClient, SmbOptions};
    /// # let client = SambaClient::new(SmbOptions::new(r"\\server\share"));
    /// client.get_file("remote folder/a file", "/tmp/local folder/new file").unwrap();
    /// ```
    pub fn get_file<S: AsRef<str>, P: AsRef<Path>>(
        &self,
        path: S,
        destination: P,
    ) -> RemoteResult<()> {
        let (workdir, file_name) = local_file(destination.as_ref())?;
        trace!(
            "downloading {} to {}",
            path.as_ref(),
            destination.as_ref().display()
        );
        let args = format!(
            "{} {}",
            quote_file_name(&path_utils::to_remote(path))?,
            quote_file_name(&file_name)?
        );
        self.execute(&SmbCommand::smbclient(
            &self.options,
            "get",
            &args,
            workdir,
        ))
        .map(|_| ())
    }

    /// Upload the local file `path` to `destination` on the share.
    ///
    /// ```rust,no_run
    /// # use samba_client::{SambaClient, SmbOptions};
    /// # let client = SambaClient::new(SmbOptions::new(r"\\server\share"));
    /// client.send_file("/tmp/local folder/a file", "remote folder/new file").unwrap();
    /// ```
    pub fn send_file<P: AsRef<Path>, S: AsRef<str>>(
        &self,
        path: P,
        destination: S,
    ) -> RemoteResult<()> {
        let (workdir, file_name) = local_file(path.as_ref())?;
        trace!(
            "uploading {} to {}",
            path.as_ref().display(),
            destination.as_ref()
        );
        let args = format!(
            "{} {}",
            quote_file_name(&file_name)?,
            quote_file_name(&path_utils::to_remote(destination))?
        );
        self.execute(&SmbCommand::smbclient(
            &self.options,
            "put",
            &args,
            workdir,
        ))
        .map(|_| ())
    }

    /// Remove `file_name` from the share
    pub fn delete_file<S: AsRef<str>>(&self, file_name: S) -> RemoteResult<()> {
        trace!("removing file {}", file_name.as_ref());
        self.run_smbclient("del", &path_utils::to_remote(file_name))
            .map(|_| ())
    }

    /// List the names on the share matching `<prefix>*<suffix>`, in the order smbclient reports them.
    ///
    /// `prefix` may start with a directory (e.g. `cargo/report`); the returned names are relative to it.
    /// If the directory doesn't exist, the list is empty.
    pub fn list_files<S: AsRef<str>>(&self, prefix: S, suffix: S) -> RemoteResult<Vec<String>> {
        let (prefix, suffix) = (prefix.as_ref(), suffix.as_ref());
        let pattern = path_utils::to_remote(format!("{}*{}", prefix, suffix));
        trace!("listing files matching {}", pattern);
        // smbclient lists bare names, without the directory
        let name_prefix = path_utils::remote_file_name(prefix);
        match self.run_smbclient("dir", &pattern) {
            Ok(output) => Ok(parser::parse_listing(&output, name_prefix, suffix)),
            Err(RemoteError {
                kind: RemoteErrorType::NoSuchFileOrDirectory,
                ..
            }) => {
                debug!("nothing matches {}", pattern);
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Make directory at `remote_path`.
    ///
    /// If the directory already exists, the error smbclient reports is returned.
    pub fn mkdir<S: AsRef<str>>(&self, remote_path: S) -> RemoteResult<()> {
        trace!("making directory at {}", remote_path.as_ref());
        self.run_smbclient("mkdir", &path_utils::to_remote(remote_path))
            .map(|_| ())
    }

    /// List `remote_path`, returning smbclient output as is
    pub fn dir<S: AsRef<str>>(&self, remote_path: S) -> RemoteResult<String> {
        trace!("listing {}", remote_path.as_ref());
        self.run_smbclient("dir", &path_utils::to_remote(remote_path))
    }

    /// Returns whether `remote_path` exists on the share
    pub fn file_exists<S: AsRef<str>>(&self, remote_path: S) -> RemoteResult<bool> {
        trace!("checking if {} exists...", remote_path.as_ref());
        match self.dir(remote_path.as_ref()) {
            Ok(_) => Ok(true),
            Err(RemoteError {
                kind: RemoteErrorType::NoSuchFileOrDirectory,
                ..
            }) => {
                debug!("{} doesn't exist", remote_path.as_ref());
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// List the shares visible to an anonymous guest
    pub fn get_all_shares(&self) -> RemoteResult<Vec<String>> {
        trace!("listing shares");
        let output = self.execute(&SmbCommand::smbtree(&self.options))?;
        Ok(parser::parse_shares(&output.stdout))
    }

    // -- private

    fn run_smbclient(&self, verb: &str, args: &str) -> RemoteResult<String> {
        self.execute(&self.command(verb, args))
            .map(|output| output.combined())
    }

    /// Run `command` and classify its result.
    ///
    /// A nonzero exit is `NoSuchFileOrDirectory` if the output reports a missing object,
    /// `ProtocolError` otherwise; the error message is the combined output.
    fn execute(&self, command: &SmbCommand) -> RemoteResult<ProcessOutput> {
        trace!(
            "running `{}` from {}",
            command,
            command.workdir().display()
        );
        let output = self
            .runner
            .run(&command.command_line(), command.workdir())
            .map_err(|e| {
                error!("could not run {}: {}", command.program(), e);
                RemoteError::new_ex(RemoteErrorType::IoError, e)
            })?;
        debug!(
            "{} exited with {:?} ({} bytes out, {} bytes err)",
            command.program(),
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );
        if output.success {
            return Ok(output);
        }
        let all_output = output.combined();
        let kind = if parser::is_missing_object(&all_output) {
            RemoteErrorType::NoSuchFileOrDirectory
        } else {
            error!(
                "{} failed with {:?}: {}",
                command.program(),
                output.status,
                all_output.trim()
            );
            RemoteErrorType::ProtocolError
        };
        Err(RemoteError::new_ex(kind, all_output))
    }
}

/// Split the local file of a transfer into the directory to run from and its name
fn local_file(p: &Path) -> RemoteResult<(PathBuf, String)> {
    path_utils::split_local(p).ok_or_else(|| {
        error!("{} is not a file path", p.display());
        RemoteError::new_ex(
            RemoteErrorType::BadFile,
            format!("{} has no file name", p.display()),
        )
    })
}

fn quote_file_name(name: &str) -> RemoteResult<String> {
    shell::dquote(name).ok_or_else(|| {
        error!("file name {} contains '\"'", name);
        RemoteError::new_ex(
            RemoteErrorType::BadFile,
            format!("file name contains '\"': {}", name),
        )
    })
}


#[cfg(test)]
#[cfg(feature = "with-containers")]
mod container_test {

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    #[test]
    #[serial]
    fn should_upload_and_download_file() {
        crate::mock::logger();
        let client = init_client();
        let dir = random_name();
        assert!(client.mkdir(&dir).is_ok());
        let tmp = TempDir::new().unwrap();
        let local = tmp.path().join("a file.txt");
        std::fs::write(&local, "test data\n").unwrap();
        let remote = format!("{}/a file.txt", dir);
        assert!(client.send_file(&local, &remote).is_ok());
        assert_eq!(client.file_exists(&remote).unwrap(), true);
        let downloaded = tmp.path().join("downloaded.txt");
        assert!(client.get_file(&remote, &downloaded).is_ok());
        assert_eq!(std::fs::read_to_string(&downloaded).unwrap(), "test data\n");
        assert!(client.delete_file(&remote).is_ok());
        assert_eq!(client.file_exists(&remote).unwrap(), false);
    }

    #[test]
    #[serial]
    fn should_list_files() {
        crate::mock::logger();
        let client = init_client();
        let dir = random_name();
        assert!(client.mkdir(&dir).is_ok());
        let tmp = TempDir::new().unwrap();
        for name in ["report_jan.csv", "report_feb.csv", "other.txt"] {
            let local = tmp.path().join(name);
            std::fs::write(&local, "test data\n").unwrap();
            assert!(client
                .send_file(&local, format!("{}/{}", dir, name))
                .is_ok());
        }
        let mut files = client
            .list_files(format!("{}/report", dir), String::from(".csv"))
            .unwrap();
        files.sort();
        assert_eq!(
            files,
            vec![String::from("report_feb.csv"), String::from("report_jan.csv")]
        );
    }

    #[test]
    #[serial]
    fn should_tell_whether_missing_paths_exist() {
        crate::mock::logger();
        let client = init_client();
        assert_eq!(client.file_exists(random_name()).unwrap(), false);
        assert_eq!(
            client
                .file_exists(format!("{}/{}", random_name(), random_name()))
                .unwrap(),
            false
        );
        assert!(client
            .list_files(format!("{}/report", random_name()), String::from(".csv"))
            .unwrap()
            .is_empty());
    }

    #[test]
    #[serial]
    fn should_not_make_directory_twice() {
        crate::mock::logger();
        let client = init_client();
        let dir = random_name();
        assert!(client.mkdir(&dir).is_ok());
        assert!(client.mkdir(&dir).is_err());
    }

    #[test]
    #[serial]
    fn should_not_download_missing_file() {
        crate::mock::logger();
        let client = init_client();
        let tmp = TempDir::new().unwrap();
        let local: PathBuf = tmp.path().join("a.txt");
        assert!(client.get_file(random_name(), &local).is_err());
    }

    fn init_client() -> SambaClient {
        SambaClient::new(
            SmbOptions::new("//localhost/temp")
                .username("test")
                .password("test")
                .domain("pavao")
                .port(3445),
        )
    }

    fn random_name() -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect()
    }
}
