//! ## Utils
//!
//! Utilities used by the client

pub mod parser;
pub mod path;
pub mod shell;
