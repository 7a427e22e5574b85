//! Sequential kubectl execution
//!
//! Commands run one at a time through `sh -c`. The first failing command
//! stops the batch; the error keeps whatever output was collected so far.

use std::time::Instant;

use thiserror::Error;
use tokio::process::Command;

use crate::observability::{AssistantMetrics, StructuredLogger};

/// Environment variable that must be `1` before anything is executed
pub const ALLOW_ENV_VAR: &str = "ALLOW_KUBECTL";

/// Whether an `ALLOW_KUBECTL` value enables execution: exactly `1` or `true`
pub fn execution_allowed(value: &str) -> bool {
    matches!(value, "1" | "true")
}

/// Separator between per-command output blocks
pub const OUTPUT_SEPARATOR: &str = "\n---\n";

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Execution disabled. Set ALLOW_KUBECTL=1 to enable.")]
    Disabled,

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        output: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} ({status})")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },
}

impl ExecError {
    /// Output collected before the failure, if any command ran
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecError::Disabled => None,
            ExecError::Spawn { output, .. } | ExecError::CommandFailed { output, .. } => {
                Some(output)
            }
        }
    }
}

/// Runs translated kubectl commands when execution is allowed
#[derive(Clone)]
pub struct KubectlRunner {
    allowed: bool,
    shell: String,
    logger: StructuredLogger,
    metrics: AssistantMetrics,
}

impl KubectlRunner {
    pub fn new(allowed: bool) -> Self {
        Self {
            allowed,
            shell: "sh".to_string(),
            logger: StructuredLogger::new("kubectl-runner"),
            metrics: AssistantMetrics::new(),
        }
    }

    /// Allow execution only when `ALLOW_KUBECTL` is `1` or `true`
    pub fn from_env() -> Self {
        let allowed = std::env::var(ALLOW_ENV_VAR)
            .map(|v| execution_allowed(&v))
            .unwrap_or(false);
        Self::new(allowed)
    }

    /// Run commands through `shell` instead of `sh`; it is invoked as
    /// `shell -c <command>`
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Run each command in order and return the combined transcript
    pub async fn run(&self, commands: &[String]) -> Result<String, ExecError> {
        if !self.allowed {
            self.logger.log_execution_refused("execution disabled");
            return Err(ExecError::Disabled);
        }

        let started = Instant::now();
        let result = self.run_all(commands).await;
        let elapsed = started.elapsed();

        self.metrics
            .observe_execution(result.is_ok(), elapsed.as_secs_f64());
        self.logger
            .log_execution(commands.len(), result.is_ok(), elapsed.as_millis());

        result
    }

    async fn run_all(&self, commands: &[String]) -> Result<String, ExecError> {
        let mut blocks: Vec<String> = Vec::with_capacity(commands.len());

        for command in commands {
            let output = match Command::new(&self.shell).arg("-c").arg(command).output().await {
                Ok(output) => output,
                Err(source) => {
                    return Err(ExecError::Spawn {
                        command: command.clone(),
                        output: blocks.join(OUTPUT_SEPARATOR),
                        source,
                    });
                }
            };

            blocks.push(format!(
                "$ {}\n{}{}",
                command,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ));

            if !output.status.success() {
                return Err(ExecError::CommandFailed {
                    command: command.clone(),
                    status: output.status.to_string(),
                    output: blocks.join(OUTPUT_SEPARATOR),
                });
            }
        }

        Ok(blocks.join(OUTPUT_SEPARATOR))
    }
}
