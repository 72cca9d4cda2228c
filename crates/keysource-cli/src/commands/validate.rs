//! Credential validation command.

use std::process::ExitCode;

use clap::Args;
use console::style;
use keysource_core::{validate_key, KeyResolver, ResolveOptions};

#[derive(Args)]
pub struct ValidateArgs {
    /// Name of the credential to validate (openai, anthropic, github, stripe)
    pub key_name: String,

    /// Literal credential value; skips source resolution
    #[arg(long = "key", value_name = "VALUE")]
    pub key: Option<String>,

    /// Forbid .env-sourced credentials and exit non-zero on failure
    #[arg(long)]
    pub strict: bool,
}

/// Resolve (unless overridden) and probe a credential. Exits 0 on success
/// and on non-strict failure; non-zero only under `--strict`.
pub async fn run(args: ValidateArgs) -> ExitCode {
    let failure_exit = if args.strict {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    let credential = match args.key {
        Some(value) => value,
        None => {
            let resolver = KeyResolver::new();
            let options = ResolveOptions {
                strict: args.strict,
                ..Default::default()
            };
            match resolver.resolve(&args.key_name, options).await {
                Ok(resolved) => {
                    tracing::debug!(source = %resolved.source, "credential resolved");
                    resolved.value
                }
                Err(err) => {
                    println!("{} {}: {err}", style("✗").red(), args.key_name);
                    return failure_exit;
                }
            }
        }
    };

    let outcome = validate_key(&args.key_name, &credential).await;
    if outcome.valid {
        println!("{} {}: {}", style("✓").green(), args.key_name, outcome.message);
        ExitCode::SUCCESS
    } else {
        println!("{} {}: {}", style("✗").red(), args.key_name, outcome.message);
        failure_exit
    }
}
