use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use warmup_rs::analysis::EmailAnalyzer;
use warmup_rs::api::ApiServer;
use warmup_rs::classifier::BayesianModel;
use warmup_rs::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting warmup-rs analyzer service");

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    info!("Configuration loaded");
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Model artifact: {}", config.model.artifact_path);

    // The classifier is a required dependency: load it eagerly so a broken
    // deployment fails at boot instead of per request
    let model = match BayesianModel::load(&config.model.artifact_path) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to load spam model: {}", e);
            return Err(e.into());
        }
    };

    let (spam_count, ham_count) = model.training_counts();
    info!(
        "Spam model loaded: {} tokens ({} spam / {} ham messages)",
        model.vocabulary_size(),
        spam_count,
        ham_count
    );

    let analyzer = EmailAnalyzer::new(Arc::new(model))?;
    let server = ApiServer::new(analyzer, config.server.listen_addr.clone());

    server.run().await?;

    Ok(())
}
