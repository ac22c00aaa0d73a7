use sentinel_reader::{ExtractionConfig, InMemorySourceLoader, RawSnapshot, SourceKind};

/// Current-period multi-disease export with merged two-row headers
pub const TEITEN_CSV: &str = "\
定点把握疾患 週報,2025年12週
\"(3月17日〜3月23日)\",,,,
,インフルエンザ,,\"新型コロナウイルス感染症(COVID-19)\",
,報告,定当,報告,定当
総数,25000,5.12,4000,0.81
北海道,1200,5.45,150,0.68
東京都,2100,5.38,600,1.54
保健所管内,1,1,1,1
大阪府,1500,5.5
\"沖縄県\",200,3.38,\"1,2\",x
";

/// Current-period ARI syndrome export
pub const ARI_CSV: &str = "\
急性呼吸器感染症(ARI) 週報
2025年12週
,報告数,定当
,,
総 数,280000,61.4
北海道,12000,55.2
東京都,30000,70.75
不明,1,1
";

/// Historical export with one section per disease
pub const TOUGAI_CSV: &str = "\
当該年 定点当たり報告数
インフルエンザ,,,
,10週,,11週,,12週,
,報告,定当,報告,定当,報告,定当
総数,40000,8.1,30000,6.4,25000,5.12
東京都,3200,8.2,2700,6.9,2100,5.38

新型コロナ 定点当たり
,12週,11週,10週
,定当,定当,定当
総数,0.81,0.9,1.02
北海道,0.68,-,0.7
";

#[must_use]
pub fn sample_loader() -> InMemorySourceLoader {
    InMemorySourceLoader::new()
        .with_source(SourceKind::Teiten, TEITEN_CSV)
        .with_source(SourceKind::Ari, ARI_CSV)
        .with_source(SourceKind::Tougai, TOUGAI_CSV)
}

#[must_use]
pub fn sample_snapshot() -> RawSnapshot {
    RawSnapshot {
        teiten: TEITEN_CSV.to_string(),
        ari: ARI_CSV.to_string(),
        tougai: TOUGAI_CSV.to_string(),
    }
}

#[must_use]
pub fn test_config() -> ExtractionConfig {
    ExtractionConfig::default()
}
