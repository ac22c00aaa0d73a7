use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{error, info, warn};
use sentinel_reader::{
    DirectorySourceLoader, Disease, ExtractionConfig, SourceConfig, load_snapshot,
    process_snapshot,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SENTINEL_DATA_DIR").ok())
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);

    info!("Loading snapshot from: {}", base_dir.display());
    let start = Instant::now();

    let loader = DirectorySourceLoader::new(SourceConfig::new(&base_dir));
    let snapshot = match load_snapshot(&loader).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load snapshot from {}: {e}", base_dir.display());
            return Err(e.into());
        }
    };

    let config = ExtractionConfig::default();
    let report = process_snapshot(&snapshot, &config);
    info!("Processed snapshot in {:?}", start.elapsed());

    match report.period {
        Some(period) => info!("Reporting period: {} week {}", period.year, period.week),
        None => warn!("No reporting period found in current-period table"),
    }
    for disease in Disease::ALL {
        match (report.national(disease), report.alert_for(disease)) {
            (Some(national), Some(alert)) => info!(
                "{}: national {:.2} [{}] {}",
                disease.display_name(),
                national.value,
                alert.level,
                alert.message
            ),
            _ => warn!("{}: no national value", disease.display_name()),
        }
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
