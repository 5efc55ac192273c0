//! Kindred HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use kindred::cache::ScoreCacheHandle;
use kindred::config::Config;
use kindred::embedding::{EncoderConfig, PromptEncoder};
use kindred::gateway::{HandlerState, create_router_with_state};
use kindred::llm::{GenerationBackend, OllamaClient};
use kindred::sanitize::TextSanitizer;
use kindred::similarity::{SemanticScorer, SimilarityEngine};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
██╗  ██╗██╗███╗   ██╗██████╗ ██████╗ ███████╗██████╗
██║ ██╔╝██║████╗  ██║██╔══██╗██╔══██╗██╔════╝██╔══██╗
█████╔╝ ██║██╔██╗ ██║██║  ██║██████╔╝█████╗  ██║  ██║
██╔═██╗ ██║██║╚██╗██║██║  ██║██╔══██╗██╔══╝  ██║  ██║
██║  ██╗██║██║ ╚████║██████╔╝██║  ██║███████╗██████╔╝
╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝╚═════╝ ╚═╝  ╚═╝╚══════╝╚═════╝

        SCORE. COMPARE. CASCADE.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Kindred starting"
    );

    let encoder = match &config.model_dir {
        Some(dir) => match PromptEncoder::load(EncoderConfig::new(dir.clone())) {
            Ok(encoder) => Some(Arc::new(encoder)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to load embedding model, semantic metric will fall back to vector-space"
                );
                None
            }
        },
        None => {
            tracing::warn!(
                "No KINDRED_MODEL_DIR configured, semantic metric will fall back to vector-space"
            );
            None
        }
    };

    let cache = ScoreCacheHandle::with_capacity(config.cache_capacity);
    let engine = Arc::new(SimilarityEngine::new(cache, SemanticScorer::new(encoder)));
    tracing::info!(embedder_mode = engine.encoder_mode(), "Similarity engine ready");

    let sanitizer = Arc::new(TextSanitizer::new()?);

    let generation = Arc::new(OllamaClient::new(config.generation_config())?);
    let llm_available = generation.is_available().await;
    tracing::info!(
        llm_available,
        llm_model = %config.llm_model,
        llm_base_url = %config.llm_base_url,
        "Generation backend probed"
    );

    let state = HandlerState::new(
        engine,
        sanitizer,
        generation,
        config.llm_model.clone(),
        config.llm_max_retries,
    );

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Kindred shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("KINDRED_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/health", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
