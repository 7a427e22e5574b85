//! Kubernetes natural-language command assistant

mod intent;
mod runner;

pub use intent::{parse_command, Intent, ParsedCommand, DEFAULT_NAMESPACE, UNKNOWN_NOTE};
pub use runner::{execution_allowed, ExecError, KubectlRunner, ALLOW_ENV_VAR, OUTPUT_SEPARATOR};
