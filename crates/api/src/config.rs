use quotex_delivery::quote_source::DEFAULT_QUOTE_API_URL;
use quotex_delivery::ChannelKind;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Which delivery channel to use (default: `email`).
    pub channel: ChannelKind,
    /// External random-quote API endpoint.
    pub quote_api_url: String,
    /// Fixed webhook endpoint, required when the webhook channel is selected.
    pub webhook_url: Option<String>,
    /// Fixed recipient address for `GET /send-quote` on the email channel.
    pub recipient_email: Option<String>,
    /// Service identity carried in webhook notifications.
    pub sender_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `3000`                             |
    /// | `CORS_ORIGINS`         | `*`                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                               |
    /// | `DELIVERY_CHANNEL`     | `email`                            |
    /// | `QUOTE_API_URL`        | `https://api.quotable.io/random`   |
    /// | `WEBHOOK_URL`          | — (required for webhook channel)   |
    /// | `QUOTE_RECIPIENT`      | — (required for GET /send-quote on email) |
    /// | `SENDER_NAME`          | `quotex`                           |
    ///
    /// SMTP settings are loaded separately by
    /// [`EmailConfig::from_env`](quotex_delivery::EmailConfig::from_env).
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let channel: ChannelKind = std::env::var("DELIVERY_CHANNEL")
            .unwrap_or_else(|_| "email".into())
            .parse()
            .unwrap_or_else(|e| panic!("{e}"));

        let quote_api_url =
            std::env::var("QUOTE_API_URL").unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.into());

        let webhook_url = std::env::var("WEBHOOK_URL").ok();
        let recipient_email = std::env::var("QUOTE_RECIPIENT").ok();

        let sender_name = std::env::var("SENDER_NAME").unwrap_or_else(|_| "quotex".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            channel,
            quote_api_url,
            webhook_url,
            recipient_email,
            sender_name,
        }
    }
}
