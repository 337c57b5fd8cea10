//! Scripted extractor for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::command::{ExtractorOutput, ExtractorRunner};
use crate::error::MediaResult;

/// Replays a canned output and records the arguments it was called with.
pub struct FakeRunner {
    output: ExtractorOutput,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            output: ExtractorOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                exit_code: Some(0),
                success: true,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self {
            output: ExtractorOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                exit_code: Some(exit_code),
                success: false,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_args(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ExtractorRunner for FakeRunner {
    async fn run(&self, args: &[String]) -> MediaResult<ExtractorOutput> {
        self.calls.lock().unwrap().push(args.to_vec());
        Ok(self.output.clone())
    }
}
