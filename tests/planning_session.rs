// tests/planning_session.rs
//
// End-to-end scenarios through the session edit boundary: the same flows a
// presentation layer would drive, from raw text edits to rendered output.

use inventory_planner::io::reporting;
use inventory_planner::session::{EditError, ParameterField, PlanningSession};
use inventory_planner::{InventoryItem, RiskLevel, SimulationParameters};

#[test]
fn baseline_session_matches_the_worked_example() {
    let session = PlanningSession::new();
    let r = session.results().rounded();

    assert_eq!(r.final_forecast, 1000);
    assert_eq!(r.safety_stock, 350); // 1.65 × 150 × √2 ≈ 350
    assert_eq!(r.reorder_point, 2350);
    assert_eq!(r.recommended_stock, 3350);
}

#[test]
fn a_full_what_if_flow_recomputes_at_every_step() {
    let mut session = PlanningSession::new();

    session
        .edit_parameter(ParameterField::HistoricalMonthlySales, "2000")
        .unwrap();
    assert_eq!(session.results().rounded().final_forecast, 2000);

    session
        .edit_parameter(ParameterField::ProductLifecycleFactor, "0.5")
        .unwrap();
    assert_eq!(session.results().rounded().final_forecast, 1000);

    session
        .edit_parameter(ParameterField::LeadTimeMonths, "0")
        .unwrap();
    let r = session.results();
    assert_eq!(r.safety_stock, 0.0);
    assert_eq!(r.reorder_point, 0.0);
}

#[test]
fn rejected_edits_leave_the_session_exactly_as_it_was() {
    let mut session = PlanningSession::new();
    let params_before = *session.params();
    let results_before = *session.results();

    assert!(session
        .edit_parameter(ParameterField::LeadTimeMonths, "-3")
        .is_err());
    assert!(session
        .edit_parameter(ParameterField::DemandStdDev, "not a number")
        .is_err());
    assert!(session.edit_consumption("201-10800-000", "").is_err());
    assert!(session.edit_consumption("no-such-sku", "5").is_err());

    assert_eq!(*session.params(), params_before);
    assert_eq!(*session.results(), results_before);
    assert_eq!(session.inventory()[0].avg_monthly_consumption, 144.0);
}

#[test]
fn seeded_dashboard_flags_the_expected_rows() {
    let session = PlanningSession::new();
    let rows = session.assess_inventory();

    // 2061 / 144 ≈ 14.3 months.
    assert_eq!(rows[0].1.risk, RiskLevel::High);
    assert_eq!(rows[0].1.months_display(), "14.3");

    // 817 / 118 ≈ 6.9 months.
    assert_eq!(rows[1].1.risk, RiskLevel::Low);

    // 1960 / 157 ≈ 12.5 months.
    assert_eq!(rows[2].1.risk, RiskLevel::High);
}

#[test]
fn zeroing_consumption_shows_na_but_still_flags_risk() {
    let mut session = PlanningSession::new();
    session.edit_consumption("201-10800-002", "0").unwrap();

    let rows = session.assess_inventory();
    assert_eq!(rows[1].1.months_display(), "N/A");
    assert_eq!(rows[1].1.risk, RiskLevel::High);

    let table = reporting::format_risk_table(&rows);
    assert!(table.contains("N/A"));
}

#[test]
fn editing_one_row_never_affects_another() {
    let mut session = PlanningSession::new();
    let before: Vec<_> = session.assess_inventory().iter().map(|(_, a)| *a).collect();

    session.edit_consumption("201-10800-000", "500").unwrap();
    let after = session.assess_inventory();

    assert_ne!(after[0].1, before[0]);
    assert_eq!(after[1].1, before[1]);
    assert_eq!(after[2].1, before[2]);
}

#[test]
fn custom_state_sessions_are_supported() {
    let params = SimulationParameters {
        historical_monthly_sales: 500.0,
        lead_time_months: 4.0,
        ..SimulationParameters::default()
    };
    let inventory = vec![InventoryItem::new("900-00001-000", 50, 0, 25.0)];

    let session = PlanningSession::with_state(params, inventory).unwrap();
    assert_eq!(session.results().rounded().final_forecast, 500);

    let rows = session.assess_inventory();
    assert_eq!(rows[0].1.months_display(), "2.0");
    assert_eq!(rows[0].1.risk, RiskLevel::Low);
}

#[test]
fn parameter_edits_never_touch_the_inventory_and_vice_versa() {
    let mut session = PlanningSession::new();
    let inventory_before = session.inventory().to_vec();
    let results_before = *session.results();

    session
        .edit_parameter(ParameterField::DemandStdDev, "300")
        .unwrap();
    assert_ne!(*session.results(), results_before);
    assert_eq!(session.inventory(), &inventory_before[..]);

    let results_after_param_edit = *session.results();
    session.edit_consumption("201-10800-000", "200").unwrap();
    assert_eq!(*session.results(), results_after_param_edit);
}

#[test]
fn risk_report_csv_round_trips_through_the_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("risk_report.csv");
    let path = path.to_str().unwrap();

    let session = PlanningSession::new();
    let rows = session.assess_inventory();
    reporting::write_risk_report(path, &rows).unwrap();

    let contents = std::fs::read_to_string(path).unwrap();
    let mut lines = contents.lines();

    assert_eq!(
        lines.next().unwrap(),
        "sku,current_stock,in_transit,avg_monthly_consumption,months_of_consumption,risk"
    );
    assert_eq!(lines.next().unwrap(), "201-10800-000,431,1630,144.0,14.3,HIGH");
    assert_eq!(contents.lines().count(), 4); // header + three SKUs
}

#[test]
fn invalid_input_error_messages_name_the_field() {
    let mut session = PlanningSession::new();

    let err = session
        .edit_parameter(ParameterField::LeadTimeMonths, "-1")
        .unwrap_err();
    assert_eq!(err.to_string(), "lead time (months) cannot be negative, got -1");

    let err = session
        .edit_parameter(ParameterField::MarketActivityCoefficient, "0")
        .unwrap_err();
    assert!(matches!(err, EditError::NotPositive { .. }));
}
