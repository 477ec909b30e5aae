use inventory_planner::io::reporting;
use inventory_planner::model::options::SERVICE_LEVELS;
use inventory_planner::session::{ParameterField, PlanningSession};

fn main() {
    println!("=== Supply Chain Planning Calculator ===\n");

    // 1. START A SESSION
    // Defaults: 1000 units/month history, L = 2 months, 95% service level,
    // sigma = 150, plus the three demo SKUs.
    let mut session = PlanningSession::new();

    println!("Baseline scenario:");
    print!("{}", reporting::format_results_panel(&session.results().rounded()));

    // 2. WHAT-IF: GROWTH-STAGE PRODUCT WITH A PROMOTION
    // Lifecycle x1.5, market activity x1.2, and a tighter 99% service level
    // picked from the selectable option table.
    let z_99 = SERVICE_LEVELS
        .iter()
        .find(|option| option.label == "99%")
        .map(|option| option.z_score.to_string())
        .unwrap_or_else(|| "2.33".to_string());

    let edits = [
        (ParameterField::ProductLifecycleFactor, "1.5"),
        (ParameterField::MarketActivityCoefficient, "1.2"),
        (ParameterField::ServiceLevelZScore, z_99.as_str()),
    ];
    for (field, raw) in edits {
        if let Err(e) = session.edit_parameter(field, raw) {
            eprintln!("Edit rejected ({}): {}", field.name(), e);
        }
    }

    println!("\nGrowth scenario (x1.5 lifecycle, x1.2 promo, 99% service):");
    print!("{}", reporting::format_results_panel(&session.results().rounded()));

    // 3. RISK DASHBOARD
    // Slow down consumption of one SKU to show the risk flag flipping.
    if let Err(e) = session.edit_consumption("201-15050-000", "90") {
        eprintln!("Edit rejected: {}", e);
    }

    let rows = session.assess_inventory();
    println!();
    print!("{}", reporting::format_risk_table(&rows));

    // 4. EXPORT RESULTS
    let output_file = "risk_report.csv";
    match reporting::write_risk_report(output_file, &rows) {
        Ok(_) => println!("\nSuccess! Risk table written to ./{}", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }
}
