//! Record conversion and JSON round-trip.

use fl_catalog::material;
use fl_core::units::{kgpm3, m, m3ps, mm, pa, pas};
use fl_hydraulics::{BoundaryCondition, Fitting, FlowInput, PipeSpec, analyze};
use fl_pump::PumpCatalog;
use fl_results::AnalysisRecord;

fn run_analysis() -> AnalysisRecord {
    let catalog = PumpCatalog::standard().unwrap();
    let steel = material("steel").unwrap();
    let pipe = PipeSpec::new(mm(100.0), m(50.0), steel.roughness()).unwrap();
    let fittings = vec![
        Fitting::new("globe-valve", "Globe valve, fully open", 10.0, m(10.0)),
        Fitting::new("exit", "Pipe exit", 1.0, m(50.0)),
    ];
    let flow = FlowInput::new(m3ps(0.015), kgpm3(997.0), pas(8.9e-4));
    let boundary = BoundaryCondition::new(m(0.0), m(10.0), pa(101_325.0), pa(101_325.0));

    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();
    AnalysisRecord::from(&result)
}

#[test]
fn record_mirrors_analysis_values() {
    let record = run_analysis();

    assert!((record.pipe.diameter_m - 0.1).abs() < 1e-12);
    assert_eq!(record.fittings.len(), 2);
    assert_eq!(record.flow.regime, "turbulent");
    assert!(record.friction.converged);
    assert_eq!(record.system_curve.flows_m3_s.len(), 50);
    assert_eq!(
        record.loss_profile.len(),
        record.energy_profile.x_m.len()
    );
    assert!(record.power.motor_w > record.power.shaft_w);
}

#[test]
fn json_round_trip_preserves_record() {
    let record = run_analysis();

    let json = serde_json::to_string(&record).unwrap();
    let back: AnalysisRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.flow.reynolds, record.flow.reynolds);
    assert_eq!(back.operating_point.pump_id, record.operating_point.pump_id);
    assert_eq!(back.h_total_m, record.h_total_m);
    assert_eq!(back.system_curve.heads_m, record.system_curve.heads_m);
    assert_eq!(back.energy_profile.egl_m, record.energy_profile.egl_m);
}
