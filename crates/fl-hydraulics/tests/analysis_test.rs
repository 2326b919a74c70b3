//! Integration tests for the full analysis pipeline.

use approx::assert_relative_eq;
use fl_catalog::{fitting, material};
use fl_core::units::constants::G0_MPS2;
use fl_core::units::{celsius, kgpm3, m, m3ps, mm, pa, pas};
use fl_fluids::Water;
use fl_hydraulics::{
    BoundaryCondition, Fitting, FlowInput, FlowRegime, PipeSpec, analyze,
};
use fl_pump::{PumpCatalog, select};

/// DN100 commercial-steel line, 50 m, 15 L/s of water: the documented
/// reference scenario.
fn dn100_scenario() -> (PipeSpec, Vec<Fitting>, FlowInput, BoundaryCondition) {
    let steel = material("steel").unwrap();
    let pipe = PipeSpec::new(mm(100.0), m(50.0), steel.roughness()).unwrap();

    let at = |code: &str, position: f64| {
        let entry = fitting(code).unwrap();
        Fitting::new(entry.code, entry.display_name, entry.k, m(position))
    };
    let fittings = vec![
        at("entrance", 0.0),
        at("check-valve", 5.0),
        at("globe-valve", 10.0),
        at("elbow-90", 20.0),
        at("elbow-90", 30.0),
        at("tee-branch", 40.0),
        at("exit", 50.0),
    ];

    let flow = FlowInput::new(m3ps(0.015), kgpm3(997.0), pas(8.9e-4));
    let boundary = BoundaryCondition::new(m(0.0), m(10.0), pa(101_325.0), pa(101_325.0));
    (pipe, fittings, flow, boundary)
}

#[test]
fn dn100_reference_scenario() {
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();

    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    assert_relative_eq!(result.flow.velocity.value, 1.91, max_relative = 2e-3);
    assert_relative_eq!(result.flow.reynolds, 213_952.0, max_relative = 1e-3);
    assert_eq!(result.flow.regime, FlowRegime::Turbulent);
    assert!(result.friction.converged);
    assert!((result.friction.factor - 0.0185).abs() < 5e-4);
    assert!((result.h_total - 4.99).abs() < 0.05, "h_L = {}", result.h_total);
}

#[test]
fn dn100_selects_a_matching_pump() {
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();
    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    let op = &result.operating_point;
    assert!(!op.fallback);
    // Duty point: ~15 m at 15 L/s. The mid-range pump covers it.
    assert_eq!(op.pump_id, "CP-50");
    assert!(op.head >= 0.95 * result.pump_head_required);
    assert!(op.efficiency > 0.5);
}

#[test]
fn loss_profile_ends_at_total_loss() {
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();
    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    let end = result.loss_profile.final_point();
    assert_relative_eq!(end.h_total, result.h_total, max_relative = 1e-9);
    assert_relative_eq!(end.h_friction, result.h_friction, max_relative = 1e-9);
    assert_relative_eq!(end.h_minor, result.h_minor, max_relative = 1e-9);

    // Two samples per fitting plus the end points.
    assert_eq!(result.loss_profile.points.len(), 2 * fittings.len() + 2);
}

#[test]
fn energy_lines_are_consistent_with_losses() {
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();
    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    let energy = &result.energy_profile;
    let velocity_head =
        result.flow.velocity.value * result.flow.velocity.value / (2.0 * G0_MPS2);

    let h_in = 101_325.0 / (997.0 * G0_MPS2) + velocity_head;
    assert_relative_eq!(energy.egl[0], h_in, max_relative = 1e-9);

    let drop = energy.egl[0] - energy.egl.last().unwrap();
    assert_relative_eq!(drop, result.h_total, max_relative = 1e-9);

    for (egl, hgl) in energy.egl.iter().zip(&energy.hgl) {
        assert_relative_eq!(egl - hgl, velocity_head, max_relative = 1e-9);
    }
}

#[test]
fn reselecting_from_result_reproduces_operating_point() {
    // Determinism: feeding the result's own system curve and duty point back
    // into the selector returns the identical operating point.
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();
    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    let reselected = select(
        &catalog,
        &result.system_curve,
        result.pump_head_required,
        0.015,
    )
    .unwrap();

    assert_eq!(reselected.operating_point, result.operating_point);
}

#[test]
fn analysis_is_deterministic() {
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, flow, boundary) = dn100_scenario();

    let a = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();
    let b = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    assert_eq!(a.operating_point, b.operating_point);
    assert_eq!(a.h_total, b.h_total);
    assert_eq!(a.friction.factor, b.friction.factor);
}

#[test]
fn provider_backed_flow_input() {
    // Same scenario via the water property provider at 25 °C (ρ ≈ 997,
    // μ ≈ 8.9e-4), exercising the collaborator seam end to end.
    let catalog = PumpCatalog::standard().unwrap();
    let (pipe, fittings, _, boundary) = dn100_scenario();

    let flow = FlowInput::from_provider(m3ps(0.015), &Water::new(), celsius(25.0)).unwrap();
    let result = analyze(&catalog, &pipe, &fittings, &flow, &boundary).unwrap();

    assert_eq!(result.flow.regime, FlowRegime::Turbulent);
    assert_relative_eq!(result.flow.reynolds, 213_952.0, max_relative = 1e-2);
}

#[test]
fn laminar_scenario_flows_through_pipeline() {
    // Very viscous fluid: laminar regime end to end.
    let catalog = PumpCatalog::standard().unwrap();
    let pipe = PipeSpec::new(mm(50.0), m(10.0), mm(0.0015)).unwrap();
    let flow = FlowInput::new(m3ps(0.0005), kgpm3(900.0), pas(0.25));
    let boundary = BoundaryCondition::new(m(0.0), m(2.0), pa(101_325.0), pa(101_325.0));

    let result = analyze(&catalog, &pipe, &[], &flow, &boundary).unwrap();

    assert_eq!(result.flow.regime, FlowRegime::Laminar);
    assert_relative_eq!(
        result.friction.factor,
        64.0 / result.flow.reynolds,
        max_relative = 1e-9
    );
}

#[test]
fn gravity_fed_line_with_unmatched_duty_falls_back() {
    // Tiny flow, huge static lift: nothing in the catalog reaches 0.9×h_req,
    // so the fallback path must report the approximate operating point.
    let catalog = PumpCatalog::standard().unwrap();
    let pipe = PipeSpec::new(mm(100.0), m(20.0), mm(0.046)).unwrap();
    let flow = FlowInput::new(m3ps(0.001), kgpm3(998.0), pas(1.0e-3));
    let boundary = BoundaryCondition::new(m(0.0), m(150.0), pa(101_325.0), pa(101_325.0));

    let result = analyze(&catalog, &pipe, &[], &flow, &boundary).unwrap();

    let op = &result.operating_point;
    assert!(op.fallback);
    assert_eq!(op.efficiency, 0.70);
    assert_eq!(op.flow, 0.001);
    assert_relative_eq!(
        op.head,
        1.1 * result.pump_head_required,
        max_relative = 1e-12
    );
    // Highest shutoff head in the standard catalog.
    assert_eq!(op.pump_id, "CP-125");
}
