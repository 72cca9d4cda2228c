//! Configuration diagnostics.

use std::process::ExitCode;

use console::style;
use keysource_core::{DotenvStore, EnvStore, SecretStore, VaultStore};

/// Well-known credential variables checked by the doctor report.
const WELL_KNOWN_KEYS: &[&str] = &[
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GITHUB_TOKEN",
    "STRIPE_API_KEY",
];

/// Report presence of `.env`, well-known variables, and source
/// availability. Diagnostics only; always exits cleanly.
pub async fn run() -> ExitCode {
    println!("🔍 keysource doctor\n");

    let env = EnvStore::new();
    let dotenv = DotenvStore::new();
    let vault = VaultStore::new();

    if dotenv.is_available().await {
        println!("{} .env file found", style("✓").green());
    } else {
        println!("{} .env file not found", style("✗").red());
    }

    for name in WELL_KNOWN_KEYS {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => {
                println!("{} {name} found in environment", style("✓").green());
            }
            _ => println!("{} {name} not found", style("✗").red()),
        }
    }

    println!("\nSources:");
    let stores: [&dyn SecretStore; 3] = [&env, &dotenv, &vault];
    for store in stores {
        if store.is_available().await {
            println!("{} {} available", style("✓").green(), store.name());
        } else {
            println!("{} {} unavailable", style("✗").red(), store.name());
        }
    }

    println!("\n💡 Tip: set keys in a .env file or environment variables");
    ExitCode::SUCCESS
}
