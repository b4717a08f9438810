//! ## Mock
//!
//! Contains mock for test units

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{CommandRunner, ProcessOutput};

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- runner

/// Runner which replays scripted outputs and records the command lines it was asked to run.
///
/// When the script is exhausted, every command succeeds with an empty output.
#[derive(Clone, Default)]
pub struct MockRunner {
    script: Arc<Mutex<VecDeque<io::Result<ProcessOutput>>>>,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to the next command with `output`
    pub fn reply(self, output: ProcessOutput) -> Self {
        self.script.lock().unwrap().push_back(Ok(output));
        self
    }

    /// Fail the next command as if the process couldn't be spawned
    pub fn fail(self, kind: io::ErrorKind) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(kind, "spawn failed")));
        self
    }

    /// Command lines run so far, with their working directory
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, line: &str, workdir: &Path) -> io::Result<ProcessOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((line.to_string(), workdir.to_path_buf()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessOutput::ok("")))
    }
}
