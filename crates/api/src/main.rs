use std::net::SocketAddr;
use std::sync::Arc;

use quotex_delivery::{
    ChannelKind, DeliveryChannel, EmailChannel, EmailConfig, QuoteClient, WebhookChannel,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotex_api::config::ServerConfig;
use quotex_api::router::build_app_router;
use quotex_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotex_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        channel = config.channel.as_str(),
        "Loaded server configuration"
    );

    // --- Quote source ---
    let quotes = Arc::new(QuoteClient::new(config.quote_api_url.clone()));
    tracing::info!(url = %config.quote_api_url, "Quote source client created");

    // --- Delivery channel ---
    // Misconfiguration of the selected channel fails fast at startup.
    let channel: Arc<dyn DeliveryChannel> = match config.channel {
        ChannelKind::Email => {
            let email_config =
                EmailConfig::from_env().expect("SMTP_HOST must be set for the email channel");
            let channel =
                EmailChannel::new(email_config).expect("Failed to build SMTP transport");
            Arc::new(channel)
        }
        ChannelKind::Webhook => {
            config
                .webhook_url
                .as_deref()
                .expect("WEBHOOK_URL must be set for the webhook channel");
            Arc::new(WebhookChannel::new(config.sender_name.clone()))
        }
    };
    tracing::info!(channel = channel.kind().as_str(), "Delivery channel ready");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        quotes,
        channel,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
