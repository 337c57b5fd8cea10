//! yt-dlp process runner.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{MediaError, MediaResult};

/// Extractor process configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Executable name or path
    pub program: String,
    /// Upper bound on a single invocation
    pub timeout: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ExtractorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            program: std::env::var("YT_DLP_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| "yt-dlp".to_string()),
            timeout: Duration::from_secs(
                std::env::var("EXTRACTOR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

/// Captured result of one extractor invocation.
#[derive(Debug, Clone, Default)]
pub struct ExtractorOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl ExtractorOutput {
    /// Turn a nonzero exit into an error, keeping stderr for diagnosis.
    pub fn into_success(self) -> MediaResult<Self> {
        if self.success {
            return Ok(self);
        }
        let message = match self.exit_code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = Some(self.stderr).filter(|s| !s.trim().is_empty());
        Err(MediaError::extractor_failed(message, stderr, self.exit_code))
    }
}

/// Runs the extractor with a list of arguments.
///
/// Implementations must not go through a shell; arguments are passed verbatim.
#[async_trait]
pub trait ExtractorRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> MediaResult<ExtractorOutput>;

    /// Whether the extractor can be invoked at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Runner that spawns the real yt-dlp executable.
#[derive(Debug, Clone, Default)]
pub struct YtDlpRunner {
    config: ExtractorConfig,
}

impl YtDlpRunner {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ExtractorRunner for YtDlpRunner {
    async fn run(&self, args: &[String]) -> MediaResult<ExtractorOutput> {
        let program = which::which(&self.config.program)
            .map_err(|_| MediaError::YtDlpNotFound(self.config.program.clone()))?;

        debug!("Running yt-dlp: {} {}", program.display(), args.join(" "));

        let mut command = Command::new(&program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.config.timeout, command.output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "yt-dlp timed out, process killed"
                );
                return Err(MediaError::Timeout(self.config.timeout));
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !output.status.success() {
            debug!("yt-dlp stderr: {}", stderr);
        }

        Ok(ExtractorOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr,
            exit_code: output.status.code(),
            success: output.status.success(),
        })
    }

    fn is_available(&self) -> bool {
        which::which(&self.config.program).is_ok()
    }
}
