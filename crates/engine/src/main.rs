//! Dungeonmaster Engine - Main entry point.
//!
//! Narrates the current location of one session and prints it to stdout.

use std::sync::Arc;

use anyhow::Context;
use dungeonmaster_domain::SessionId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dungeonmaster_engine::infrastructure::{
    openai::OpenAiClient,
    postgres::PostgresRepositories,
    settings::{AppSettings, LlmProfiles},
};
use dungeonmaster_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root
    load_dotenv_from_repo_root();

    // Initialize logging (stderr; stdout carries only the narration)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dungeonmaster_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let settings = AppSettings::from_env()?;
    let profiles = LlmProfiles::load(&settings.llm_config_path)?;
    let llm_settings = profiles
        .profile(settings.llm_profile.as_deref())?
        .resolve(&settings);
    let session_id = SessionId::new(settings.session_id).context("SESSION_ID is invalid")?;

    tracing::info!(
        base_url = %llm_settings.base_url,
        model = %llm_settings.model,
        profile = ?settings.llm_profile,
        "LLM client configured"
    );

    // Create infrastructure clients
    let repos = PostgresRepositories::new(&settings.database_url);
    let llm = Arc::new(OpenAiClient::with_timeout(
        &llm_settings.base_url,
        &llm_settings.api_key,
        &llm_settings.model,
        llm_settings.timeout_secs,
    ));

    let app = App::new(repos.session, repos.location, llm);

    match app
        .use_cases
        .narration
        .describe_session
        .execute(session_id)
        .await?
    {
        Some(narration) => {
            println!("RESPONSE:\n{}", narration.text);
        }
        None => {
            // Nothing to narrate is not a failure; exit quietly.
            tracing::warn!(session_id = %session_id, "No narration produced");
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
