//! Finstat report runner
//!
//! Loads a trial balance from a JSON file, classifies its accounts against
//! the master taxonomy and prints the statements, ratios and dashboard as
//! JSON on stdout. Logs go to stderr.
//!
//! Usage: finstat-report <trial-balance.json>

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finstat_core::classifier::{ClassifierService, KeywordTable};
use finstat_core::dashboard::DashboardService;
use finstat_core::ledger::{IntakeService, LedgerRecord};
use finstat_core::ratios::RatioService;
use finstat_core::reports::StatementService;
use finstat_core::taxonomy::{TaxonomyService, TaxonomySource};
use finstat_shared::AppConfig;
use finstat_shared::config::LogConfig;
use finstat_shared::types::{CompanyId, UploadId};
use finstat_store::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log);

    let path = std::env::args()
        .nth(1)
        .context("usage: finstat-report <trial-balance.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let records: Vec<LedgerRecord> =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a trial balance"))?;

    let store = Arc::new(InMemoryStore::new());
    let keywords = Arc::new(KeywordTable::from_config(&config.taxonomy)?);

    let load = TaxonomyService::new(Arc::clone(&store))
        .initialize(&TaxonomySource::from_config(&config.taxonomy))
        .await?;
    info!(?load, "taxonomy ready");

    let company_id = CompanyId::new();
    let ingest = IntakeService::new(Arc::clone(&store))
        .ingest(company_id, UploadId::new(), records)
        .await?;

    let classification = ClassifierService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        keywords,
        config.classifier.clone(),
    )
    .classify(company_id)
    .await?;
    info!(
        %company_id,
        classified = classification.classified_count,
        unclassified = classification.unclassified_count,
        "classification complete"
    );

    let statements = Arc::new(StatementService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
    ));
    let ratios = Arc::new(RatioService::new(statements));
    let built = ratios.statements().build_statements(company_id).await?;
    let ratio_report = ratios.compute_from(&built);
    let dashboard = DashboardService::new(Arc::clone(&ratios))
        .summary(company_id)
        .await?;

    let report = serde_json::json!({
        "company_id": company_id,
        "ingest": ingest,
        "classification": classification,
        "statements": built,
        "ratios": ratio_report,
        "dashboard": dashboard,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
