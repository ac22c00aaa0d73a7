use crate::utils::{TEITEN_CSV, sample_loader, sample_snapshot, test_config};
use sentinel_reader::{
    AlertLevel, DirectorySourceLoader, Disease, InMemorySourceLoader, Region, ReportPeriod,
    SentinelError, SourceConfig, SourceKind, load_snapshot, process_snapshot,
};

#[tokio::test]
async fn test_snapshot_to_report() -> sentinel_reader::Result<()> {
    let snapshot = load_snapshot(&sample_loader()).await?;
    let report = process_snapshot(&snapshot, &test_config());

    assert_eq!(report.period, Some(ReportPeriod { year: 2025, week: 12 }));
    // influenza 5 + covid 4 + ari 3
    assert_eq!(report.observations.len(), 12);
    assert_eq!(report.history.len(), 4);

    let levels: Vec<(Disease, AlertLevel)> =
        report.alerts.iter().map(|a| (a.disease, a.level)).collect();
    assert_eq!(
        levels,
        vec![
            (Disease::Influenza, AlertLevel::Warning),
            (Disease::Covid19, AlertLevel::Normal),
            (Disease::AriSyndrome, AlertLevel::Normal),
        ]
    );
    assert_eq!(
        report.alert_for(Disease::Influenza).map(|a| a.message.as_str()),
        Some("全国的に流行入りしています。")
    );
    Ok(())
}

#[test]
fn test_report_queries() {
    let report = process_snapshot(&sample_snapshot(), &test_config());

    let top: Vec<&str> = report
        .top_regions(Disease::Influenza, 3)
        .iter()
        .map(|o| o.region.label())
        .collect();
    assert_eq!(top, vec!["大阪府", "北海道", "東京都"]);

    let tokyo = Region::Named("東京都".to_string());
    let series = report.history_for(Disease::Influenza, &tokyo).unwrap();
    assert_eq!(series.weeks().collect::<Vec<_>>(), vec![10, 11, 12]);
    assert!(report.history_for(Disease::AriSyndrome, &tokyo).is_none());

    assert_eq!(report.national(Disease::AriSyndrome).map(|o| o.value), Some(61.4));
}

#[test]
fn test_observations_stay_in_region_set() {
    let report = process_snapshot(&sample_snapshot(), &test_config());
    assert!(report.observations.iter().all(|o| match &o.region {
        Region::National => true,
        Region::Named(name) => sentinel_reader::models::PREFECTURES.contains(&name.as_str()),
    }));
}

#[test]
fn test_report_serializes_for_consumers() {
    let report = process_snapshot(&sample_snapshot(), &test_config());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["period"]["week"], 12);
    assert_eq!(json["observations"][0]["disease"], "Influenza");
    assert_eq!(json["observations"][0]["region"], "全国");
    assert_eq!(json["alerts"][0]["level"], "warning");
    assert_eq!(json["history"][0]["history"][0]["week"], 10);
}

#[tokio::test]
async fn test_fetch_failure_aborts_batch() {
    let loader = InMemorySourceLoader::new()
        .with_source(SourceKind::Teiten, TEITEN_CSV)
        .with_source(SourceKind::Ari, "");
    let result = load_snapshot(&loader).await;
    assert!(matches!(result, Err(SentinelError::SourceNotFound(_))));
}

#[tokio::test]
async fn test_directory_snapshot() -> sentinel_reader::Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = sample_snapshot();
    std::fs::write(dir.path().join("teiten.csv"), &snapshot.teiten)?;
    std::fs::write(dir.path().join("syndrome.csv"), &snapshot.ari)?;
    std::fs::write(dir.path().join("tougai.csv"), &snapshot.tougai)?;

    let sources = SourceConfig::new(dir.path()).with_file(SourceKind::Ari, "syndrome.csv");
    let loader = DirectorySourceLoader::new(sources);
    assert_eq!(loader.sources().ari_file, "syndrome.csv");
    let loaded = load_snapshot(&loader).await?;
    assert_eq!(loaded, snapshot);

    let missing = DirectorySourceLoader::new(SourceConfig::new(dir.path()));
    assert!(load_snapshot(&missing).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_exports_saved_with_byte_order_mark() -> sentinel_reader::Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = sample_snapshot();
    std::fs::write(dir.path().join("teiten.csv"), format!("\u{FEFF}{}", snapshot.teiten))?;
    std::fs::write(dir.path().join("ari.csv"), format!("\u{FEFF}\n{}", snapshot.ari))?;
    std::fs::write(dir.path().join("tougai.csv"), &snapshot.tougai)?;

    let loaded = load_snapshot(&DirectorySourceLoader::new(SourceConfig::new(dir.path()))).await?;
    let report = process_snapshot(&loaded, &test_config());
    let expected = process_snapshot(&snapshot, &test_config());

    assert_eq!(report.observations, expected.observations);
    assert_eq!(report.period, expected.period);
    Ok(())
}

#[test]
fn test_empty_exports_degrade_to_empty_report() {
    let mut snapshot = sample_snapshot();
    snapshot.tougai = "見出しのみ\n".to_string();
    snapshot.ari = String::new();
    let report = process_snapshot(&snapshot, &test_config());

    assert!(report.history.is_empty());
    assert!(report.national(Disease::AriSyndrome).is_none());
    assert!(report.alert_for(Disease::AriSyndrome).is_none());
    assert_eq!(report.alerts.len(), 2);
}
