use super::print::{print_lookup, print_messages, print_note, print_notes};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use versenote::api::VerseApi;
use versenote::clipboard::copy_to_clipboard;
use versenote::commands::config::{self, ConfigAction};
use versenote::config::{AppConfig, AppPaths};
use versenote::error::{Result, VerseError};
use versenote::fetch::esv::EsvClient;
use versenote::logging::init_logging;
use versenote::server::{self, AppState};
use versenote::store::fs_backend::FsBackend;
use versenote::store::{LoadReport, NoteStore};

struct AppContext {
    api: VerseApi<FsBackend>,
    config: AppConfig,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal
    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    let paths = AppPaths::discover()?;
    debug!(config_dir = %paths.config_dir.display(), "resolved directories");

    // Config does not need a store or a client
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths.config_dir, key.clone(), value.clone());
    }

    let ctx = init_context(&cli, &paths)?;

    match cli.command {
        Some(Commands::Lookup {
            reference,
            copy,
            output,
        }) => handle_lookup(&ctx, &reference.join(" "), copy, output.as_deref()).await,
        Some(Commands::Save { reference, text }) => handle_save(ctx, &reference, &text.join(" ")),
        Some(Commands::Update { reference, text }) => {
            handle_update(ctx, &reference, &text.join(" "))
        }
        Some(Commands::Delete { reference }) => handle_delete(ctx, &reference.join(" ")),
        Some(Commands::Show { reference }) => handle_show(&ctx, &reference.join(" ")),
        Some(Commands::Serve { port, bind }) => handle_serve(ctx, port, bind).await,
        Some(Commands::Config { .. }) => Ok(()),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli, paths: &AppPaths) -> Result<AppContext> {
    let mut config = match AppConfig::load(&paths.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} ignoring unreadable config: {}", "Warning:".yellow(), e);
            AppConfig::default()
        }
    };
    config.apply_env()?;

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.resolve_store_path(&paths.data_dir),
    };
    let (store, report) = NoteStore::load(FsBackend::new(store_path));
    report_load(&report);

    if config.api_token.is_empty() {
        warn!("no API token configured; lookups will be rejected by the passage service");
    }
    let client = EsvClient::new(
        config.api_url.clone(),
        config.api_token.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    Ok(AppContext {
        api: VerseApi::new(store, Arc::new(client)),
        config,
    })
}

fn report_load(report: &LoadReport) {
    match report {
        LoadReport::Loaded { notes } => debug!(notes, "store ready"),
        LoadReport::NotFound(path) => info!(path = %path.display(), "starting with an empty store"),
        LoadReport::Corrupt { .. } => {
            if let Some(problem) = report.problem() {
                eprintln!("{} {}", "Warning:".yellow(), problem);
            }
        }
    }
}

async fn handle_lookup(
    ctx: &AppContext,
    reference: &str,
    copy: bool,
    output: Option<&Path>,
) -> Result<()> {
    let result = ctx.api.lookup(reference).await?;
    let Some(lookup) = result.lookup else {
        print_messages(&result.messages);
        return Ok(());
    };

    print_lookup(&lookup);
    print_messages(&result.messages);

    if copy {
        match copy_to_clipboard(&lookup.to_plain_text()) {
            Ok(()) => println!("{}", "Results copied to clipboard.".green()),
            Err(e) => eprintln!("{} {}", "Warning:".yellow(), e),
        }
    }

    if let Some(path) = output {
        let exported = ctx.api.export_lookup(&lookup, path)?;
        print_messages(&exported.messages);
    }
    Ok(())
}

fn handle_save(mut ctx: AppContext, reference: &str, text: &str) -> Result<()> {
    let result = ctx
        .api
        .save_note(reference, text)
        .map_err(|e| save_failed(reference, e))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(mut ctx: AppContext, reference: &str, text: &str) -> Result<()> {
    let result = ctx
        .api
        .update_note(reference, text)
        .map_err(|e| save_failed(reference, e))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(mut ctx: AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.delete_note(reference)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.show_note(reference)?;
    for note in &result.listed_notes {
        print_note(note);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_serve(ctx: AppContext, port: Option<u16>, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| ctx.config.bind_address.clone());
    let ip: IpAddr = bind
        .parse()
        .map_err(|_| VerseError::InvalidInput(format!("Invalid bind address: {}", bind)))?;
    let addr = SocketAddr::new(ip, port.unwrap_or(ctx.config.port));

    let (store, source) = ctx.api.into_parts();
    println!("{} http://{}", "Listening on".green(), addr);
    server::serve(AppState::new(store, source), addr).await
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config::run(config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

/// Input problems pass through as they are; everything else is a failed write.
fn save_failed(reference: &str, err: VerseError) -> VerseError {
    match err {
        VerseError::InvalidInput(_) => err,
        other => VerseError::Store(format!(
            "Failed to save interpretation for {}: {}",
            reference.trim(),
            other
        )),
    }
}
