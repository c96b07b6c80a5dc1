use anyhow::Context;
use clap::Parser;
use prodsim_api::RestApi;
use prodsim_core::StopWords;
use prodsim_similarity::EngineConfig;
use prodsim_storage::EngineManager;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Same-category product recommendations over a product catalog
#[derive(Parser, Debug)]
#[command(name = "prodsim")]
#[command(about = "Serve product similarity recommendations", long_about = None)]
struct Args {
    /// Path to the cleaned product CSV
    #[arg(short, long, default_value = "data/products_clean.csv")]
    data: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// JSON file with engine settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Neighbours returned when a request omits top_n
    #[arg(long)]
    top_n: Option<usize>,

    /// Shortest token kept in the vocabulary
    #[arg(long)]
    min_token_len: Option<usize>,

    /// Keep stop words in the vocabulary
    #[arg(long)]
    no_stop_words: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };
        if let Some(top_n) = self.top_n {
            config.default_top_n = top_n;
        }
        if let Some(min_token_len) = self.min_token_len {
            config.min_token_len = min_token_len;
        }
        if self.no_stop_words {
            config.stop_words = StopWords::None;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting prodsim v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let config = args.engine_config()?;
    let manager = Arc::new(EngineManager::new(&args.data, config));

    // Build before serving so the first request does not pay for it
    let engine = manager.engine()?;
    info!(
        "Engine ready: {} products, {} terms",
        engine.len(),
        engine.vocabulary_size()
    );

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(manager, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
