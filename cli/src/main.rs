//! CLI entrypoint for tribunal
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration is loaded and converted into the
//! juror bench, the registry and stores are constructed, and either the
//! HTTP API is served or a single file is judged on the spot.

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tribunal_application::ports::audit_log::{NoAuditLog, VerdictAuditLog};
use tribunal_application::{
    JurorPool, RequestVerdictUseCase, ReviewFeedbackUseCase, SubmitFeedbackUseCase, VerdictQuery,
};
use tribunal_infrastructure::{
    ConfigLoader, FileConfig, InMemoryCaseRegistry, InMemoryFeedbackStore, JsonlAuditLog,
    StaffList, jurors,
};
use tribunal_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, TrialProgress, http, http::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Keep the non-blocking writer guard alive for the process lifetime
    let _log_guard = match &cli.log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tribunal.log"));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
            None
        }
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    match cli.command {
        Command::Serve {
            host,
            port,
            audit_log,
        } => serve(config, host, port, audit_log).await,
        Command::Judge { file, output } => judge(config, file, output, cli.quiet).await,
    }
}

/// Build the full dependency graph from configuration.
fn wire(
    config: &FileConfig,
    audit: Arc<dyn VerdictAuditLog>,
) -> Result<AppState<InMemoryCaseRegistry, InMemoryFeedbackStore>> {
    let bench = jurors::build_bench(&config.bench)?;
    if bench.is_empty() {
        bail!("No jurors configured. Add [[bench]] entries to tribunal.toml.");
    }

    let params = config.trial.params();

    // === Dependency Injection ===
    let registry = Arc::new(InMemoryCaseRegistry::new());
    let store = Arc::new(InMemoryFeedbackStore::new());

    let verdicts = Arc::new(RequestVerdictUseCase::new(
        Arc::clone(&registry),
        Arc::clone(&store),
        JurorPool::new(bench, params.juror_timeout),
        params.tally_rule(),
        params.fingerprinter(),
        Arc::clone(&audit),
    ));
    let submit = SubmitFeedbackUseCase::new(Arc::clone(&store), Arc::clone(&audit));
    let review = ReviewFeedbackUseCase::new(
        store,
        registry,
        Arc::new(StaffList::new(config.review.staff.clone())),
        audit,
    );

    Ok(AppState::new(verdicts, submit, review))
}

fn audit_log(path: Option<PathBuf>) -> Arc<dyn VerdictAuditLog> {
    match path {
        Some(path) => match JsonlAuditLog::new(&path) {
            Some(log) => {
                info!("Audit log: {}", log.path().display());
                Arc::new(log)
            }
            None => Arc::new(NoAuditLog),
        },
        None => Arc::new(NoAuditLog),
    }
}

/// Run the verdict / feedback / review HTTP API.
async fn serve(
    config: FileConfig,
    host: Option<String>,
    port: Option<u16>,
    audit_path: Option<PathBuf>,
) -> Result<()> {
    let audit = audit_log(audit_path.or_else(|| config.server.audit_log.clone()));
    let state = web::Data::new(wire(&config, audit)?);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info!("Starting tribunal API on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::configure::<InMemoryCaseRegistry, InMemoryFeedbackStore>)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("binding {}:{}", host, port))?
    .run()
    .await?;

    Ok(())
}

/// Judge a single file (or stdin) and print the verdict.
async fn judge(
    config: FileConfig,
    file: Option<PathBuf>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let audit = audit_log(config.server.audit_log.clone());
    let state = wire(&config, audit)?;

    let content = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    if content.trim().is_empty() {
        bail!("No content to judge");
    }

    let query = VerdictQuery::Content(content);
    let report = if quiet || matches!(output, OutputFormat::Json) {
        state.verdicts.execute(query).await?
    } else {
        state
            .verdicts
            .execute_with_observer(query, &TrialProgress::new())
            .await?
    };

    match output {
        OutputFormat::Summary => print!("{}", ConsoleFormatter::format(&report)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
    }

    Ok(())
}
