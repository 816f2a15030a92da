//! pokerep - CLI client for the Pokémon report-generation backend
//!
//! This is the presentation surface: it turns commands into orchestrator
//! intents, renders the resulting state, and relays events to the
//! terminal. All report lifecycle logic lives in the ops crate.

mod cli;
mod display;
mod error;
mod events;
mod setup;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use pokerep_config::Config;
use pokerep_ops::{OperationResult, OpsCtx};
use pokerep_types::{QuantityField, ReportId};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    // Config precedence: file, then environment, then CLI flags
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;
    config.merge_env();
    if let Some(base_url) = &cli.global.base_url {
        config.backend.base_url = base_url.clone();
    }

    let (tx, mut rx) = pokerep_events::channel();
    let ctx = setup::build_context(config, tx)?;

    // Relay orchestrator events to the terminal until the channel closes
    let mut handler = EventHandler::new(cli.global.json);
    let event_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            handler.handle_event(&event);
        }
    });

    let renderer = OutputRenderer::new(cli.global.json);
    let result = execute(&ctx, cli.command).await;

    ctx.teardown();
    drop(ctx); // closes the event channel
    let _ = event_task.await;

    let result = result?;
    renderer.render_result(&result)?;

    if result.is_success() {
        Ok(())
    } else {
        process::exit(1);
    }
}

/// Dispatch a command to the orchestrator
async fn execute(ctx: &OpsCtx, command: Commands) -> Result<OperationResult, CliError> {
    match command {
        Commands::Types => {
            let categories = pokerep_ops::load_catalog(ctx).await?;
            Ok(OperationResult::CategoryList(categories))
        }
        Commands::List => {
            let reports = pokerep_ops::refresh(ctx).await?;
            Ok(OperationResult::ReportList(reports))
        }
        Commands::Create { category, qty } => {
            let qty = vet_quantity(&qty)?;
            // the catalog gates creation, so it loads first
            pokerep_ops::load_catalog(ctx).await?;
            let report = pokerep_ops::create_report(ctx, &category, &qty).await?;
            Ok(OperationResult::Created(report))
        }
        Commands::Delete { id } => {
            let outcome = pokerep_ops::delete_report(ctx, &id).await?;
            Ok(OperationResult::Deleted(outcome))
        }
        Commands::Download { id, output } => {
            // resolve the id against the backend's current list
            pokerep_ops::refresh(ctx).await?;
            let report = ctx.store.get(&ReportId::from(id.as_str())).ok_or_else(|| {
                CliError::Ops(pokerep_errors::ReportError::NotFound { id: id.clone() }.into())
            })?;

            let url = pokerep_ops::download_report(ctx, &report.artifact_url);
            match output {
                Some(path) => {
                    let written = ctx.net.download_file(&url, &path).await?;
                    Ok(OperationResult::Success(format!(
                        "Saved {written} bytes to {}",
                        path.display()
                    )))
                }
                None => Ok(OperationResult::Artifact { url }),
            }
        }
    }
}

/// Entry-stage quantity filtering.
///
/// The quantity argument passes through the same field rules an
/// interactive entry does: digits or the empty string are accepted and
/// forwarded for submission checks, anything else is refused here before
/// the catalog even loads.
fn vet_quantity(qty: &str) -> Result<String, CliError> {
    let mut field = QuantityField::new();
    if field.set(qty.trim()) {
        Ok(field.raw().to_string())
    } else {
        Err(CliError::Ops(
            pokerep_errors::ReportError::InvalidQuantity {
                input: qty.to_string(),
            }
            .into(),
        ))
    }
}

/// Initialize the tracing subscriber
fn init_tracing(json_mode: bool, debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json_mode {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_argument_follows_entry_field_rules() {
        assert_eq!(vet_quantity("3").unwrap(), "3");
        assert_eq!(vet_quantity(" 12 ").unwrap(), "12");
        // transient-empty is forwarded; submission rejects it downstream
        assert_eq!(vet_quantity("").unwrap(), "");
        for input in ["-2", "1.5", "abc", "1e3"] {
            assert!(vet_quantity(input).is_err(), "accepted {input:?}");
        }
    }
}
