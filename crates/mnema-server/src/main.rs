use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mnema_config::Config;
use mnema_core::HintService;
use mnema_lang_latin::LatinHinter;
use mnema_types::HintRequest;
use tokio::signal;

pub mod cli;
pub mod routes;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command, HintArgs, ServeArgs};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();
    telemetry::init(&config.log_format);

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                }
            };
            serve(config, args, shutdown).await
        }
        Command::Hint(args) => run_once(config, args).await,
    }
}

/// Run the HTTP server until `shutdown` resolves
pub async fn serve(
    mut config: Config,
    args: ServeArgs,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let state = Arc::new(AppState::new(config));
    if state.service.has_generator() {
        tracing::info!(model = state.service.model(), "hint generator enabled");
    } else {
        tracing::warn!("GEMINI_API_KEY not set, serving fallback hints only");
    }

    let addr = state.config.server.socket_addr();
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("Shutdown requested");
    Ok(())
}

/// Resolve a single hint and print it as JSON
async fn run_once(config: Config, args: HintArgs) -> anyhow::Result<()> {
    let service = if args.offline {
        HintService::offline(Arc::new(LatinHinter::new()))
    } else {
        AppState::build_service(&config)
    };

    let mut request = HintRequest::new(args.lemma, args.english);
    request.entry = args.entry;

    let (result, outcome) = service.resolve(&request).await;
    tracing::debug!(?outcome, "hint resolved");

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
