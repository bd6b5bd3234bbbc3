use std::sync::Arc;

use {
    clap::Parser,
    secrecy::ExposeSecret,
    tracing::{info, warn},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    ackbot_config::BotConfig,
    ackbot_matcher::AckMatcher,
    ackbot_store::PgStore,
    ackbot_telegram::{HandlerContext, start_polling},
};

#[derive(Parser)]
#[command(name = "ackbot", about = "HHG Employee Handbook acknowledgment bot")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = BotConfig::from_env()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        handbook_version = %config.handbook_version,
        "ackbot starting"
    );

    if config.allowed_chat_id.is_none() {
        warn!("ALLOWED_CHAT_ID is not set; messages from every chat will be processed");
    }

    let pool = ackbot_store::connect(config.database_url.expose_secret()).await?;
    let store = Arc::new(PgStore::new(pool));

    let ctx = HandlerContext {
        matcher: AckMatcher::new(&config.handbook_version)?,
        directory: store.clone(),
        audit: store,
        allowed_chat_id: config.allowed_chat_id,
    };

    let cancel = start_polling(&config.token, ctx).await?;

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    cancel.cancel();

    Ok(())
}
