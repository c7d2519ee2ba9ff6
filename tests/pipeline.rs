use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde_json::{Value, json};

use revenue_forecast::app::pipeline::run_from_text;
use revenue_forecast::domain::{Confidence, ResultEnvelope};
use revenue_forecast::forecast::classify;
use revenue_forecast::report::render_json;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn input_text(values: &[f64]) -> String {
    let records: Vec<Value> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let date = start().checked_add_days(Days::new(i as u64)).unwrap();
            json!({ "date": date.to_string(), "totalRevenue": v })
        })
        .collect();
    Value::Array(records).to_string()
}

fn run_json(text: &str) -> (Value, u8) {
    let out = run_from_text(text);
    let rendered = render_json(&out.envelope, false).unwrap();
    (serde_json::from_str(&rendered).unwrap(), out.exit_code)
}

#[test]
fn linear_series_has_unit_r_squared_and_high_confidence() {
    let values: Vec<f64> = (0..20).map(|i| 100.0 + 10.0 * i as f64).collect();
    let (json, code) = run_json(&input_text(&values));

    assert_eq!(code, 0);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["modelMetrics"]["rSquared"], 1.0);
    assert!(json.get("warning").is_none());
    for (i, point) in json["data"]["forecast"].as_array().unwrap().iter().enumerate() {
        assert_eq!(point["confidence"], "high");
        let expected = 100.0 + 10.0 * (20 + i) as f64;
        assert!((point["predictedRevenue"].as_f64().unwrap() - expected).abs() < 0.011);
    }
}

#[test]
fn noisy_series_respect_forecast_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 1.0).unwrap();

    for case in 0..200 {
        let n = rng.gen_range(2..40);
        let level = rng.gen_range(-500.0..5_000.0);
        let trend = rng.gen_range(-200.0..200.0);
        let sigma = rng.gen_range(0.0..300.0);
        let values: Vec<f64> = (0..n)
            .map(|i| level + trend * i as f64 + sigma * noise.sample(&mut rng))
            .collect();

        let out = run_from_text(&input_text(&values));
        assert_eq!(out.exit_code, 0, "case {case}");
        let ResultEnvelope::Success { data, warning } = out.envelope else {
            panic!("case {case}: expected success");
        };

        let last = start().checked_add_days(Days::new(n as u64 - 1)).unwrap();
        assert_eq!(data.forecast.len(), 7, "case {case}");
        for (k, point) in data.forecast.iter().enumerate() {
            assert_eq!(point.date, last.checked_add_days(Days::new(k as u64 + 1)).unwrap());
            assert!(point.predicted_revenue >= 0.0, "case {case}: {}", point.predicted_revenue);
        }

        let r2 = data.model_metrics.r_squared;
        assert!(r2 <= 1.0 + 1e-9, "case {case}: r2={r2}");
        let label = data.forecast[0].confidence;
        assert!(data.forecast.iter().all(|p| p.confidence == label));
        // Labels come from the unrounded R², so only check away from the edges.
        if (r2 - 0.7).abs() > 1e-3 && (r2 - 0.5).abs() > 1e-3 {
            assert_eq!(label, classify(r2), "case {case}: r2={r2}");
        }
        assert_eq!(warning.is_some(), label == Confidence::Low, "case {case}: r2={r2}");
        assert_eq!(data.input_summary.data_points, n);
    }
}

#[test]
fn shuffled_input_gives_the_same_forecast() {
    let values = [120.0, 90.0, 150.0, 140.0, 170.0, 160.0];
    let mut records: Vec<Value> = serde_json::from_str(&input_text(&values)).unwrap();
    let (sorted, _) = run_json(&Value::Array(records.clone()).to_string());

    records.reverse();
    records.swap(1, 4);
    let (shuffled, _) = run_json(&Value::Array(records).to_string());

    assert_eq!(sorted["data"]["forecast"], shuffled["data"]["forecast"]);
    assert_eq!(sorted["data"]["inputSummary"], shuffled["data"]["inputSummary"]);
    assert_eq!(shuffled["data"]["inputSummary"]["dateRange"]["end"], "2024-01-06");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let text = input_text(&[3.0, 8.0, 2.0, 9.0, 4.0]);
    let a = render_json(&run_from_text(&text).envelope, false).unwrap();
    let b = render_json(&run_from_text(&text).envelope, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn steep_decline_never_predicts_negative_revenue() {
    let (json, code) = run_json(&input_text(&[500.0, 400.0, 300.0, 200.0, 100.0]));
    assert_eq!(code, 0);
    let forecast = json["data"]["forecast"].as_array().unwrap();
    assert!(forecast.iter().all(|p| p["predictedRevenue"].as_f64().unwrap() == 0.0));
    assert_eq!(json["data"]["forecast"][0]["confidence"], "high");
}

#[test]
fn missing_revenue_field_is_named_in_the_error() {
    let (json, code) = run_json(r#"[{"date":"2024-01-01"},{"date":"2024-01-02"}]"#);
    assert_eq!(code, 0);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("totalRevenue"));
}

#[test]
fn single_object_instead_of_array_is_rejected() {
    let (json, code) = run_json(r#"{"date":"2024-01-01","totalRevenue":100}"#);
    assert_eq!(code, 0);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("array"));
}

#[test]
fn non_numeric_revenue_is_a_data_processing_error() {
    let (json, code) = run_json(r#"[{"date":"2024-01-01","totalRevenue":"abc"}]"#);
    assert_eq!(code, 0);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Data processing error"));
    assert!(json.get("trace").is_none());
}

#[test]
fn malformed_json_is_reported_not_crashed() {
    let (json, code) = run_json("[{\"date\": \"2024-01-01\", ");
    assert_eq!(code, 0);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON input"));
}
