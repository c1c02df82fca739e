//! Operator Engine - console entry point.
//!
//! Reads one command per line from stdin and performs it for the configured
//! player against an in-memory store.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use operator_domain::Player;
use operator_engine::app::{App, Ports};
use operator_engine::infrastructure::{
    catalog::BundledGameCatalog,
    combat_resolver::HttpCombatResolver,
    config::EngineConfig,
    interpreter::{HttpInterpreter, OfflineInterpreter},
    memory_store::InMemoryPlayerRepo,
    ports::InterpreterPort,
};
use operator_engine::use_cases::ActionError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so they don't interleave with game output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "operator_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Operator Engine");

    let config = EngineConfig::from_env();
    tracing::info!(
        resolver_url = %config.resolver_url,
        interpreter_url = ?config.interpreter_url,
        player = %config.player_token,
        "Configuration loaded"
    );

    let repo = Arc::new(InMemoryPlayerRepo::new());
    repo.insert(
        config.player_token.clone(),
        &Player::new(config.player_token.clone()),
    );
    repo.insert(
        config.practice_target_token.clone(),
        &Player::new("Target Dummy").with_max_hit_points(20),
    );

    let interpreter: Arc<dyn InterpreterPort> = match &config.interpreter_url {
        Some(url) => Arc::new(HttpInterpreter::new(url)),
        None => {
            tracing::info!("INTERPRETER_URL not set, text adventures run offline");
            Arc::new(OfflineInterpreter::new())
        }
    };

    let app = App::new(
        Ports {
            player_repo: repo,
            resolver: Arc::new(HttpCombatResolver::new(&config.resolver_url)),
            catalog: Arc::new(BundledGameCatalog::new()),
            interpreter,
        },
        config.practice_target_token.clone(),
    );

    println!("You wake up at home. Type a command (look, play, attack, get info).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match app
            .use_cases
            .actions
            .perform
            .execute(&config.player_token, &line)
            .await
        {
            Ok(result) => {
                for message in result.messages {
                    println!("{message}");
                }
            }
            Err(ActionError::Resolver(e)) => {
                tracing::error!(error = %e, "Combat resolver unavailable");
                println!("The fight fizzles out. The combat service is not answering.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!("Input closed, shutting down");
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
