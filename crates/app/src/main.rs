//! `stockroom` command-line entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use stockroom_app::cli::Cli;
use stockroom_app::commands;
use stockroom_app::confirm::PromptConfirm;
use stockroom_app::{AppConfig, DisplaySurface, InventoryWidget, RecordingSurface, TerminalSurface};
use stockroom_auth::{AuthGate, GateOutcome};
use stockroom_infra::InventoryStore;

/// Exit status when the auth gate redirects.
const EXIT_REDIRECT: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_observability::tracing::init(cli.global.log_format.into());

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::from_args(&cli.global)?;
    tracing::debug!(data_dir = %config.data_dir.display(), key = %config.storage_key, "configuration resolved");

    let gate = AuthGate::with_entry_page(config.auth_provider(), config.entry_page.clone());
    let outcome = gate
        .admit(|user| {
            tracing::info!(user = user.short_name(), "initializing inventory");
            let store = InventoryStore::open_with_key(config.storage(), config.storage_key.clone());
            InventoryWidget::new(store, RecordingSurface::new())
        })
        .await?;

    let mut session = match outcome {
        GateOutcome::Admitted(session) => session,
        GateOutcome::Redirect(redirect) => {
            eprintln!("Inicia sesión para continuar: {}", redirect.to);
            return Ok(ExitCode::from(EXIT_REDIRECT));
        }
    };

    let header = session.header();
    tracing::info!(name = %header.name, photo = %header.photo, "session header");

    let mut confirm = PromptConfirm::stdio();
    let report = commands::run(session.app_mut(), cli.command, &mut confirm);

    let (_, recorded) = session.into_app().into_parts();
    let mut terminal = TerminalSurface::new(io::stdout().lock());
    if let Some(frame) = recorded.last_frame() {
        terminal.render(frame);
    }
    for notice in recorded.notices() {
        terminal.notify(notice);
    }
    drop(terminal);

    if report.success {
        for line in &report.lines {
            println!("{line}");
        }
        Ok(ExitCode::SUCCESS)
    } else {
        for line in &report.lines {
            eprintln!("{line}");
        }
        Ok(ExitCode::FAILURE)
    }
}
