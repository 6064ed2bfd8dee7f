use std::path::{Path, PathBuf};

use anyhow::Context;
use chat_client::ChatClientConfig;
use clap::Parser;
use skill_core::PromptTemplates;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_service::ServiceConfig;

/// Custom skill service: runs record batches through an Azure OpenAI deployment
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "APP_HOST")]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "APP_PORT")]
    port: Option<u16>,

    /// JSON file mapping scenario names to system prompts
    #[arg(long, env = "CUSTOM_PROMPTS_PATH")]
    prompts: Option<PathBuf>,
}

/// `.env.local` is only read outside production. Variables already set win.
fn load_env_files_from(dir: &Path) {
    if std::env::var_os("RUNNING_IN_PRODUCTION").is_none() {
        dotenvy::from_path(dir.join(".env.local")).ok();
    }
    dotenvy::from_path(dir.join(".env")).ok();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env_files_from(Path::new("."));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();

    let mut service_config = ServiceConfig::from_env();
    if let Some(host) = args.host {
        service_config.host = host;
    }
    if let Some(port) = args.port {
        service_config.port = port;
    }
    if let Some(prompts) = args.prompts {
        service_config.prompts_path = prompts;
    }

    let templates = PromptTemplates::load(&service_config.prompts_path).with_context(|| {
        format!(
            "Failed to load prompt templates from {}",
            service_config.prompts_path.display()
        )
    })?;
    let client_config = ChatClientConfig::from_env();

    tracing::info!(
        deployment = %client_config.deployment,
        api_version = %client_config.api_version,
        templates = templates.len(),
        "Configuration loaded"
    );

    web_service::server::run(service_config, client_config, templates)
        .await
        .map_err(anyhow::Error::msg)
}
