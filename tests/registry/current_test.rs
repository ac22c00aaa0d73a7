use crate::utils::{ARI_CSV, TEITEN_CSV, test_config};
use sentinel_reader::registry::{extract_multi_disease, extract_single_metric};
use sentinel_reader::{Disease, Observation, Region, parse_delimited};

fn labels_and_values(observations: &[Observation]) -> Vec<(String, f64)> {
    observations
        .iter()
        .map(|o| (o.region.label().to_string(), o.value))
        .collect()
}

#[test]
fn test_influenza_from_teiten() {
    let config = test_config();
    let grid = parse_delimited(TEITEN_CSV, config.delimiter, config.quote);
    let flu = extract_multi_disease(&grid, Disease::Influenza, &config);

    assert_eq!(
        labels_and_values(&flu),
        vec![
            ("全国".to_string(), 5.12),
            ("北海道".to_string(), 5.45),
            ("東京都".to_string(), 5.38),
            ("大阪府".to_string(), 5.5),
            ("沖縄県".to_string(), 3.38),
        ]
    );
    assert!(flu.iter().all(|o| o.disease == Disease::Influenza));
}

#[test]
fn test_covid_skips_short_rows_and_zeroes_bad_cells() {
    let config = test_config();
    let grid = parse_delimited(TEITEN_CSV, config.delimiter, config.quote);
    let covid = extract_multi_disease(&grid, Disease::Covid19, &config);

    assert_eq!(
        labels_and_values(&covid),
        vec![
            ("全国".to_string(), 0.81),
            ("北海道".to_string(), 0.68),
            ("東京都".to_string(), 1.54),
            ("沖縄県".to_string(), 0.0),
        ]
    );
}

#[test]
fn test_ari_from_fixed_column() {
    let config = test_config();
    let grid = parse_delimited(ARI_CSV, config.delimiter, config.quote);
    let ari = extract_single_metric(&grid, Disease::AriSyndrome, &config);

    assert_eq!(ari.len(), 3);
    assert_eq!(ari[0].region, Region::National);
    assert_eq!(ari[0].value, 61.4);
    assert_eq!(ari[2].region, Region::Named("東京都".to_string()));
}

#[test]
fn test_absent_regions_produce_no_observations() {
    let config = test_config();
    let grid = parse_delimited(TEITEN_CSV, config.delimiter, config.quote);
    let flu = extract_multi_disease(&grid, Disease::Influenza, &config);

    assert!(!flu.iter().any(|o| o.region.label() == "青森県"));
    assert!(!flu.iter().any(|o| o.region.label() == "保健所管内"));
}

#[test]
fn test_header_without_disease_degrades_to_empty() {
    let config = test_config();
    let text = "title\n,\n,ノロウイルス,\n,報告,定当\n総数,1,2\n";
    let grid = parse_delimited(text, config.delimiter, config.quote);

    assert!(extract_multi_disease(&grid, Disease::Influenza, &config).is_empty());
}

#[test]
fn test_byte_order_mark_keeps_row_offsets() {
    let config = test_config();
    let plain = parse_delimited(ARI_CSV, config.delimiter, config.quote);
    let with_bom = parse_delimited(&format!("\u{FEFF}\n{ARI_CSV}"), config.delimiter, config.quote);

    assert_eq!(with_bom, plain);
    assert_eq!(
        extract_single_metric(&with_bom, Disease::AriSyndrome, &config),
        extract_single_metric(&plain, Disease::AriSyndrome, &config)
    );
}

#[test]
fn test_tab_delimited_export() {
    let config = test_config().with_delimiter('\t');
    let text = ARI_CSV.replace(',', "\t");
    let grid = parse_delimited(&text, config.delimiter, config.quote);
    let ari = extract_single_metric(&grid, Disease::AriSyndrome, &config);

    assert_eq!(
        labels_and_values(&ari),
        vec![
            ("全国".to_string(), 61.4),
            ("北海道".to_string(), 55.2),
            ("東京都".to_string(), 70.75),
        ]
    );
}
