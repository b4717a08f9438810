//! ## Options
//!
//! Smb session options

use std::fmt;
use std::path::{Path, PathBuf};

const DEFAULT_USERNAME: &str = "guest";
const DEFAULT_SMBCLIENT: &str = "smbclient";
const DEFAULT_SMBTREE: &str = "smbtree";

/// Options of a smb session: share address, credentials and the tools to run
#[derive(Clone)]
pub struct SmbOptions {
    pub(crate) address: String,
    pub(crate) username: String,
    pub(crate) password: Option<String>,
    pub(crate) domain: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) smbclient: String,
    pub(crate) smbtree: String,
    pub(crate) workdir: PathBuf,
}

impl SmbOptions {
    /// Create options for the share at `address` (e.g. `\\server\share` or `//server/share`).
    ///
    /// The session logs in as `guest` without password, unless configured otherwise.
    pub fn new<S: AsRef<str>>(address: S) -> Self {
        Self {
            address: address.as_ref().to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: None,
            domain: None,
            port: None,
            smbclient: DEFAULT_SMBCLIENT.to_string(),
            smbtree: DEFAULT_SMBTREE.to_string(),
            workdir: std::env::temp_dir(),
        }
    }

    /// Construct SmbOptions with the provided username
    pub fn username<S: AsRef<str>>(mut self, username: S) -> Self {
        self.username = username.as_ref().to_string();
        self
    }

    /// Construct SmbOptions with the provided password
    pub fn password<S: AsRef<str>>(mut self, password: S) -> Self {
        self.password = Some(password.as_ref().to_string());
        self
    }

    /// Construct SmbOptions with the provided domain (workgroup)
    pub fn domain<S: AsRef<str>>(mut self, domain: S) -> Self {
        self.domain = Some(domain.as_ref().to_string());
        self
    }

    /// Construct SmbOptions with the provided port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the `smbclient` executable to run; defaults to `smbclient` in `PATH`
    pub fn smbclient<S: AsRef<str>>(mut self, program: S) -> Self {
        self.smbclient = program.as_ref().to_string();
        self
    }

    /// Set the `smbtree` executable to run; defaults to `smbtree` in `PATH`
    pub fn smbtree<S: AsRef<str>>(mut self, program: S) -> Self {
        self.smbtree = program.as_ref().to_string();
        self
    }

    /// Set the directory to run commands from when no local file is involved.
    /// Defaults to the system temporary directory.
    pub fn workdir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.workdir = dir.as_ref().to_path_buf();
        self
    }

    pub fn get_address(&self) -> &str {
        &self.address
    }

    pub fn get_username(&self) -> &str {
        &self.username
    }

    pub fn get_domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn get_port(&self) -> Option<u16> {
        self.port
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn get_workdir(&self) -> &Path {
        &self.workdir
    }
}

impl fmt::Debug for SmbOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmbOptions")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("domain", &self.domain)
            .field("port", &self.port)
            .field("smbclient", &self.smbclient)
            .field("smbtree", &self.smbtree)
            .field("workdir", &self.workdir)
            .finish()
    }
}
