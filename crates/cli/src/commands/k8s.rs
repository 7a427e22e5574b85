//! Natural-language kubectl translation, locally or through the command server

use anyhow::{bail, Result};
use assist_lib::kube::{parse_command, KubectlRunner, ParsedCommand};
use colored::Colorize;
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::output::{print_json, print_success, print_warning, OutputFormat};

/// Translate `text` in-process and optionally run the result
pub async fn translate(text: &str, run: bool, format: OutputFormat) -> Result<()> {
    let parsed = parse_command(text);
    debug!(intent = %parsed.intent, commands = parsed.kubectl.len(), "Parsed command locally");

    if !run {
        return report(&parsed, None, format);
    }

    if format.is_table() {
        print_parsed(&parsed);
    }

    let runner = KubectlRunner::from_env();
    match runner.run(&parsed.kubectl).await {
        Ok(output) => {
            if format.is_table() {
                print_output(&output);
                print_success("All commands completed");
                Ok(())
            } else {
                print_json(&json!({ "parsed": parsed, "output": output }))
            }
        }
        Err(err) => {
            if let Some(output) = err.output().filter(|o| !o.is_empty()) {
                print_output(output);
            }
            Err(err.into())
        }
    }
}

/// Delegate translation (and execution) to a running command server
pub async fn translate_remote(
    server_url: &str,
    text: &str,
    run: bool,
    format: OutputFormat,
) -> Result<()> {
    let client = ApiClient::new(server_url)?;
    let reply = client.post_command(text, run).await?;

    if let Some(error) = reply.error {
        if let Some(output) = reply.output.as_deref().filter(|o| !o.is_empty()) {
            print_output(output);
        }
        bail!(error);
    }

    let Some(parsed) = reply.parsed else {
        bail!("Server reply carried no translation");
    };

    report(&parsed, reply.output.as_deref(), format)
}

fn report(parsed: &ParsedCommand, output: Option<&str>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => match output {
            Some(output) => print_json(&json!({ "parsed": parsed, "output": output })),
            None => print_json(&json!({ "parsed": parsed })),
        },
        OutputFormat::Table => {
            print_parsed(parsed);
            if let Some(output) = output {
                print_output(output);
            }
            Ok(())
        }
    }
}

fn print_parsed(parsed: &ParsedCommand) {
    println!("{} {}", "Intent:".bold(), parsed.intent.to_string().cyan());
    println!("{} {}", "Note:".bold(), parsed.note);
    if parsed.kubectl.is_empty() {
        print_warning("No kubectl commands for this request");
        return;
    }
    println!("{}", "Suggested kubectl commands:".bold());
    for command in &parsed.kubectl {
        println!("   {}", command);
    }
}

fn print_output(output: &str) {
    println!();
    println!("{}", output);
}
