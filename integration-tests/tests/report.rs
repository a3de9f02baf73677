use approx::assert_relative_eq;
use integration_tests::{fixture::TankFixture, report::render};
use jiff::civil::date;
use serde_json::{Value, json};
use tank_assessment::{assess, minimum_thickness::Hydrostatic};

fn report_json(content: &str) -> Value {
    let fixture = TankFixture::from_toml_str(content).expect("fixture should parse");
    let years = fixture.elapsed_years().expect("dates should subtract");
    let assessment = assess(&fixture.geometry(), &fixture.courses(), years, &Hydrostatic);

    let report = render(&fixture.tank.id, fixture.tank.inspection_date, years, &assessment)
        .expect("due dates should be in range");
    serde_json::to_value(&report).expect("report should serialize")
}

#[test]
fn summary_section() {
    let report = report_json(include_str!("fixtures/corroding_tank.toml"));
    let summary = &report["summary"];

    assert_eq!(report["tank_id"], "T-204");
    assert_eq!(summary["governing_course"], 3);
    assert_eq!(summary["governing_location"], "270°");
    assert_eq!(summary["external_interval_years"], 0);
    assert_eq!(summary["internal_interval_years"], 0);
    assert_eq!(summary["critical_course"], 3);
    assert_eq!(summary["next_external_inspection"], "2025-04-14");
    assert_relative_eq!(
        summary["worst_corrosion_rate_mpy"].as_f64().unwrap(),
        12.5,
        epsilon = 1e-9
    );
}

#[test]
fn reading_rows_carry_status_labels() {
    let report = report_json(include_str!("fixtures/corroding_tank.toml"));

    let labels: Vec<&str> = report["courses"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|course| course["readings"].as_array().unwrap())
        .map(|reading| reading["status"].as_str().unwrap())
        .collect();

    assert_eq!(
        labels,
        [
            "acceptable",
            "monitor",
            "monitor",
            "action_required",
            "acceptable",
            "acceptable"
        ]
    );

    assert_eq!(
        report["tally"],
        json!({ "critical": 0, "action_required": 1, "monitor": 2, "acceptable": 3 })
    );
}

#[test]
fn due_dates_for_an_unchanged_tank() {
    let report = report_json(include_str!("fixtures/new_tank.toml"));
    let summary = &report["summary"];

    assert_eq!(summary["critical_course"], Value::Null);
    assert_eq!(summary["remaining_life"], 999.0);
    assert_eq!(summary["next_external_inspection"], "2030-04-14");
    assert_eq!(summary["next_internal_inspection"], "2045-04-14");
}

#[test]
fn unread_tank_has_no_summary() {
    let report = report_json(include_str!("fixtures/unread_tank.toml"));

    assert_eq!(report["summary"], Value::Null);
    assert_eq!(report["courses"].as_array().unwrap().len(), 2);
    assert_eq!(report["tally"]["acceptable"], 0);
}

#[test]
fn render_uses_the_inspection_date() {
    let fixture = TankFixture::from_toml_str(include_str!("fixtures/new_tank.toml")).unwrap();
    let assessment = assess(&fixture.geometry(), &fixture.courses(), 10.0, &Hydrostatic);

    let report = render("T-310", date(2020, 1, 1), 10.0, &assessment).unwrap();
    let summary = report.summary.unwrap();
    assert_eq!(summary.next_external_inspection, date(2025, 1, 1));
    assert_eq!(summary.next_internal_inspection, date(2040, 1, 1));
}
