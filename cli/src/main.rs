//! CLI entrypoint for infra-triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use triage_application::{
    DisabledTicketTracker, HandleInquiryUseCase, InquiryRecorder, LlmGateway,
    NoInquiryRecorder, ProcessInquiryUseCase, TicketTrackerPort,
};
use triage_domain::{InquiryRequest, InquiryStats, ReportPeriod};
use triage_infrastructure::{
    ConfigLoader, EmbeddingStore, FileConfig, InMemoryCache, InMemoryKnowledgeIndex,
    JiraTicketTracker, JsonlInquiryRecorder, OllamaClient, OllamaEmbedder, OllamaLlmGateway,
    load_entries, read_records,
};
use triage_presentation::{
    AskArgs, Cli, Command, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter,
    StatsPeriod,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        let config = load_config(cli.no_config, cli.config.as_ref())?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config(cli.no_config, cli.config.as_ref())?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting infra-triage");

    match command {
        Command::Ask(args) => run_ask(&config, args, cli.quiet).await,
        Command::Batch {
            file,
            concurrency,
            submit,
            output,
        } => run_batch(&config, &file, concurrency, submit, output).await,
        Command::Stats { period, recent } => run_stats(&config, period, recent),
        Command::Status { ticket_id } => run_status(&config, &ticket_id).await,
        Command::Check => run_check(&config).await,
    }
}

/// Install the tracing subscriber (stderr, plus an optional log file).
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(no_config: bool, path: Option<&PathBuf>) -> Result<FileConfig> {
    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

// === Dependency Injection ===

struct Services {
    gateway: Arc<OllamaLlmGateway>,
    index: Arc<InMemoryKnowledgeIndex>,
    tracker: Arc<dyn TicketTrackerPort>,
}

impl Services {
    async fn build(config: &FileConfig) -> Result<Self> {
        let client = OllamaClient::new(&config.llm.base_url, config.llm.timeout())?;
        let gateway = Arc::new(OllamaLlmGateway::new(
            client.clone(),
            &config.llm.model,
            config.llm.temperature,
        ));
        let embedder = Arc::new(OllamaEmbedder::new(client, &config.llm.embedding_model));

        let index = Arc::new(InMemoryKnowledgeIndex::new(embedder));
        match load_entries(&config.knowledge.path) {
            Ok(entries) => {
                let total = entries.len();
                let indexed = match config.knowledge.resolved_embeddings_path() {
                    Some(path) => {
                        let mut store = EmbeddingStore::open(path, &config.llm.embedding_model);
                        let indexed = index.add_all_with_store(entries, &mut store).await;
                        if let Err(e) = store.save() {
                            warn!("Could not save knowledge base embeddings: {}", e);
                        }
                        indexed
                    }
                    None => index.add_all(entries).await,
                };
                info!("Indexed {}/{} knowledge base entries", indexed, total);
            }
            Err(e) => warn!("Knowledge base unavailable: {}", e),
        }

        Ok(Self {
            gateway,
            index,
            tracker: build_tracker(config)?,
        })
    }

    fn use_case(&self, config: &FileConfig, submit: bool) -> Result<HandleInquiryUseCase> {
        let pipeline = ProcessInquiryUseCase::new(
            self.gateway.clone(),
            self.index.clone(),
            Arc::new(InMemoryCache::new()),
            config.routing.team_keywords()?,
            config.pipeline_params(),
        );

        Ok(HandleInquiryUseCase::new(pipeline)
            .with_tracker(self.tracker.clone())
            .with_recorder(build_recorder(config))
            .with_submission(submit))
    }
}

fn build_tracker(config: &FileConfig) -> Result<Arc<dyn TicketTrackerPort>> {
    let tracker = &config.tracker;
    match (&tracker.url, &tracker.email, &tracker.token, &tracker.project_key) {
        (Some(url), Some(email), Some(token), Some(project)) if tracker.is_complete() => Ok(
            Arc::new(JiraTicketTracker::new(url, email, token, project)?),
        ),
        _ => Ok(Arc::new(DisabledTicketTracker)),
    }
}

fn build_recorder(config: &FileConfig) -> Arc<dyn InquiryRecorder> {
    if !config.records.enabled {
        return Arc::new(NoInquiryRecorder);
    }
    match config
        .records
        .resolved_path()
        .and_then(JsonlInquiryRecorder::new)
    {
        Some(recorder) => Arc::new(recorder),
        None => {
            warn!("Inquiry records disabled: no writable record path");
            Arc::new(NoInquiryRecorder)
        }
    }
}

fn records_path(config: &FileConfig) -> Result<PathBuf> {
    match config.records.resolved_path() {
        Some(path) => Ok(path),
        None => bail!("No inquiry record path could be determined"),
    }
}

// === Commands ===

async fn run_ask(config: &FileConfig, args: AskArgs, quiet: bool) -> Result<()> {
    let format = args
        .output
        .map(triage_domain::OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let request = InquiryRequest::new(args.question, args.requester, args.channel)?
        .with_environment(args.environment)
        .with_deadline(args.deadline);

    let services = Services::build(config).await?;
    let use_case = services.use_case(config, args.submit)?;

    let inquiry = if quiet || format == triage_domain::OutputFormat::Json {
        use_case.execute(request).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(request, &progress).await
    };

    println!("{}", ConsoleFormatter.render(&inquiry, format));
    Ok(())
}

async fn run_batch(
    config: &FileConfig,
    file: &Path,
    concurrency: usize,
    submit: bool,
    output: Option<OutputFormat>,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let questions: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if questions.is_empty() {
        bail!("No questions found in {}", file.display());
    }
    info!("Processing {} inquiries", questions.len());

    let services = Services::build(config).await?;
    let use_case = Arc::new(services.use_case(config, submit)?);

    let handled: Vec<_> = futures::stream::iter(questions)
        .map(|question| {
            let use_case = Arc::clone(&use_case);
            async move {
                let request = InquiryRequest::new(question, "batch", "batch")?;
                Ok::<_, anyhow::Error>(use_case.execute(request).await)
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    for (index, inquiry) in handled.into_iter().enumerate() {
        let inquiry = inquiry?;
        let line = match output {
            Some(OutputFormat::Json) => serde_json::to_string(&inquiry)?,
            Some(OutputFormat::Full) => ConsoleFormatter::format(&inquiry),
            Some(OutputFormat::Brief) | None => ConsoleFormatter::format_batch_line(index, &inquiry),
        };
        println!("{}", line);
    }
    Ok(())
}

fn run_stats(config: &FileConfig, period: StatsPeriod, recent: usize) -> Result<()> {
    let path = records_path(config)?;
    let records = read_records(&path)?;

    let period = ReportPeriod::from(period);
    let stats = InquiryStats::collect(&records, period.since(Utc::now()));
    println!("{}", ConsoleFormatter::format_stats(&stats, period.label()));

    if recent > 0 {
        let newest = InquiryStats::recent(&records, recent);
        println!("{}", ConsoleFormatter::format_recent(&newest));
    }
    Ok(())
}

async fn run_status(config: &FileConfig, ticket_id: &str) -> Result<()> {
    let tracker = build_tracker(config)?;
    if !tracker.is_enabled() {
        bail!("Ticket tracker is not configured. Set [tracker] url, email, token and project_key.");
    }

    let status = tracker.ticket_status(ticket_id).await?;
    println!("{}", ConsoleFormatter::format_ticket_status(&status));
    Ok(())
}

async fn run_check(config: &FileConfig) -> Result<()> {
    let services = Services::build(config).await?;
    let mut healthy = true;

    match services.gateway.health_check().await {
        Ok(()) => println!(
            "[ OK ] Model endpoint: {} ({})",
            config.llm.base_url,
            services.gateway.model_name()
        ),
        Err(e) => {
            healthy = false;
            println!("[FAIL] Model endpoint: {} ({})", config.llm.base_url, e);
        }
    }

    let entries = services.index.len().await;
    if entries > 0 {
        println!(
            "[ OK ] Knowledge base: {} entries from {}",
            entries,
            config.knowledge.path.display()
        );
    } else {
        healthy = false;
        println!(
            "[FAIL] Knowledge base: no entries indexed from {}",
            config.knowledge.path.display()
        );
    }

    if services.tracker.is_enabled() {
        println!("[ OK ] Ticket tracker: configured");
    } else {
        println!("[ -- ] Ticket tracker: not configured (dry run)");
    }

    if !healthy {
        bail!("One or more dependencies are unavailable");
    }
    Ok(())
}
