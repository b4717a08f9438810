#![crate_name = "samba_client"]
#![crate_type = "lib"]

//! # samba-client
//!
//! samba-client is a SMB client which drives the samba command line tools (`smbclient` and `smbtree`)
//! to transfer, list and remove files on a remote share.
//!
//! No SMB protocol is implemented here: every operation builds a `smbclient` command line,
//! runs it and classifies its output.
//!
//! ## Get started
//!
//! Add the client and **remotefs** (for the error types) to your project dependencies:
//!
//! ```toml
//! remotefs = "^0.3"
//! samba-client = "^0.1"
//! ```
//!
//! these features are supported:
//!
//! - `no-log`: disable logging. By default, this library will log via the `log` crate.
//!
//! ### Samba client
//!
//! Here is a basic usage example, with the `SambaClient`.
//!
//! ```rust,no_run
//! use samba_client::{SambaClient, SmbOptions};
//!
//! let client = SambaClient::new(
//!     SmbOptions::new("//localhost/temp")
//!         .username("test")
//!         .password("test")
//!         .domain("WORKGROUP")
//!         .port(445),
//! );
//!
//! // make directory
//! assert!(client.mkdir("cargo").is_ok());
//! // upload a file
//! assert!(client.send_file("/tmp/report.csv", "cargo/report.csv").is_ok());
//! // check whether it exists
//! assert_eq!(client.file_exists("cargo/report.csv").ok(), Some(true));
//! // list reports
//! for name in client.list_files("cargo/report", ".csv").unwrap() {
//!     println!("{}", name);
//! }
//! ```
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

// -- crates
#[macro_use]
extern crate log;

mod client;

pub use client::{CommandRunner, ProcessOutput, SambaClient, ShellRunner, SmbCommand, SmbOptions};

// -- utils
pub(crate) mod utils;
// -- mock
#[cfg(test)]
pub(crate) mod mock;
