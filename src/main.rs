use anyhow::Context;
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use triggers_defaults::defaults::{default_objects, DefaultingContext, UPGRADE_ENV_VAR};

#[derive(Parser, Debug)]
#[command(
    name = "set-defaults",
    version,
    about = "Apply EventListener defaults to a JSON document"
)]
struct Cli {
    /// EventListener or List JSON to read ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Migrate deprecated trigger fields (binding, interceptor, params)
    #[arg(long, env = UPGRADE_ENV_VAR, value_parser = BoolishValueParser::new())]
    upgrade: bool,
}

impl Cli {
    /// File to read, or `None` for stdin
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    fn defaulting_context(&self) -> DefaultingContext {
        if self.upgrade {
            DefaultingContext::new().with_upgrade_via_defaulting()
        } else {
            DefaultingContext::new()
        }
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the defaulted document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = cli.defaulting_context();

    info!(
        input = ?cli.input_path(),
        upgrading = ctx.is_upgrade_via_defaulting(),
        "Applying EventListener defaults"
    );

    let raw = read_input(cli.input_path())?;
    let doc: serde_json::Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let defaulted = match default_objects(&doc, &ctx) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Defaulting failed");
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&defaulted)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
