use std::collections::HashMap;

use box_params::{
    group, BoxPlotPipeline, BoxStatCalculator, InvalidInputReason, Observation, ResultTable,
    SummaryConfig,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn service_checks() -> Vec<Observation<String>> {
    let mut obs = vec![];
    for v in [12.0, 15.0, 14.0, 13.0, 16.0, 15.0, 14.0, 90.0] {
        obs.push(Observation::new("PAK".to_string(), v));
    }
    for v in 1..=10 {
        obs.push(Observation::new("MAIL".to_string(), v as f64));
    }
    obs
}

#[test]
fn grouping_keeps_every_observation() {
    let groups: HashMap<&str, Vec<f64>> = group(vec![("A", 1.0), ("B", 2.0), ("A", 3.0), ("A", 4.0)]);
    assert_eq!(groups["A"], vec![1.0, 3.0, 4.0]);
    assert_eq!(groups["B"], vec![2.0]);
}

#[test]
fn size_one_group_is_grouped_but_cannot_be_summarized() {
    let groups: HashMap<&str, Vec<f64>> = group(vec![("A", 1.0), ("B", 2.0), ("A", 3.0), ("A", 4.0)]);
    let calc = BoxStatCalculator::default();

    assert!(calc.summarize("A", &groups["A"]).is_ok());

    let err = calc.summarize("B", &groups["B"]).unwrap_err();
    assert_eq!(err.key(), "B");
    assert!(matches!(
        err.reason(),
        InvalidInputReason::AllOutliers { q1, q2, q3, .. } if *q1 == 2.0 && *q2 == 2.0 && *q3 == 2.0
    ));
}

#[test]
fn table_is_identical_for_shuffled_input() {
    let pipeline = BoxPlotPipeline::default();
    let expected = pipeline.build_table(service_checks()).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut obs = service_checks();
        obs.shuffle(&mut rng);
        assert_eq!(pipeline.build_table(obs).unwrap(), expected);
    }
}

#[test]
fn spiky_service_reports_its_outlier() {
    let table = BoxPlotPipeline::default()
        .build_table(service_checks())
        .unwrap();
    let pak = table.get(&"PAK".to_string()).unwrap();

    assert_eq!(pak.outliers, vec![90.0]);
    assert_eq!(pak.qmax, 16.0);
    assert_eq!(pak.qmin, 12.0);
    assert!(pak.q1 <= pak.q2 && pak.q2 <= pak.q3);

    let mail = table.get(&"MAIL".to_string()).unwrap();
    assert!(mail.outliers.is_empty());
    assert_eq!((mail.qmin, mail.qmax), (1.0, 10.0));
}

#[test]
fn wider_whiskers_swallow_the_spike() {
    let config = SummaryConfig::from_json(r#"{"whisker_coef": 100.0, "parallel": false}"#).unwrap();
    let table = BoxPlotPipeline::new(&config)
        .unwrap()
        .build_table(service_checks())
        .unwrap();
    let pak = table.get(&"PAK".to_string()).unwrap();
    assert!(pak.outliers.is_empty());
    assert_eq!(pak.qmax, 90.0);
}

#[test]
fn table_serializes_outliers_as_numbers() {
    let table = BoxPlotPipeline::default()
        .build_table(service_checks())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();

    assert_eq!(json[0]["key"], "MAIL");
    assert_eq!(json[1]["key"], "PAK");
    assert_eq!(json[1]["outliers"], serde_json::json!([90.0]));

    let back: ResultTable<String> = ResultTable::from_json(&table.to_json().unwrap()).unwrap();
    assert_eq!(back, table);
}
