use approx::assert_relative_eq;
use gridplot::api::{PlotEngineConfig, ZoomOutcome};
use gridplot::core::{PlotRect, ScreenPoint, Viewport, ViewportState};
use gridplot::interaction::{ViewportController, ZoomBehavior};
use gridplot::render::NullRenderer;
use gridplot::PlotEngine;

fn controller() -> ViewportController {
    let mut controller = ViewportController::new(ZoomBehavior::default());
    // 400x300 rect, 10px grid steps, ceiling 200px -> max scale 20.
    controller.reset_for_new_bounds(PlotRect::new(0.0, 0.0, 400.0, 300.0), 10.0, 10.0, 200.0);
    controller
}

fn dense_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(Viewport::new(800, 600));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_points((0..=100_i64).map(|x| (x, x % 7)))
        .expect("points should install");
    engine
}

#[test]
fn max_scale_follows_grid_step_ceiling() {
    assert_relative_eq!(controller().max_scale(), 20.0);
}

#[test]
fn zoom_keeps_focal_point_fixed() {
    let mut controller = controller();
    let focal = ScreenPoint::new(100.0, 200.0);

    assert_eq!(controller.apply_zoom(focal, 2.0), ZoomOutcome::Applied);
    let state = controller.state();
    assert_relative_eq!(state.scale, 2.0);
    // tx = fx + (0 - fx) * 2 with fx measured from the left edge.
    assert_relative_eq!(state.translation_x, -100.0);
    // fy measured from the bottom edge: 200 - 300 = -100.
    assert_relative_eq!(state.translation_y, 100.0);
}

#[test]
fn zoom_factor_below_minimal_step_is_rejected() {
    let mut controller = controller();
    let before = controller.state();

    assert_eq!(
        controller.apply_zoom(ScreenPoint::new(200.0, 150.0), 0.1),
        ZoomOutcome::Rejected
    );
    assert_eq!(controller.state(), before);
}

#[test]
fn minimal_step_boundary_is_inclusive() {
    let mut controller = controller();
    let center = ScreenPoint::new(200.0, 150.0);
    assert_eq!(controller.apply_zoom(center, 4.0), ZoomOutcome::Applied);
    let zoomed = controller.state();

    assert_eq!(controller.apply_zoom(center, 0.24), ZoomOutcome::Rejected);
    assert_eq!(controller.state(), zoomed);

    assert_eq!(controller.apply_zoom(center, 0.25), ZoomOutcome::Applied);
    assert_relative_eq!(controller.scale(), 1.0);
    assert_eq!(ZoomBehavior::default().min_step_factor, 0.25);
}

#[test]
fn non_finite_zoom_input_is_rejected() {
    let mut controller = controller();
    let center = ScreenPoint::new(200.0, 150.0);
    assert_eq!(controller.apply_zoom(center, f64::NAN), ZoomOutcome::Rejected);
    assert_eq!(
        controller.apply_zoom(center, f64::INFINITY),
        ZoomOutcome::Rejected
    );
    assert_eq!(
        controller.apply_zoom(ScreenPoint::new(f64::NAN, 0.0), 2.0),
        ZoomOutcome::Rejected
    );
}

#[test]
fn near_unit_factor_is_jitter() {
    let mut controller = controller();
    assert_eq!(
        controller.apply_zoom(ScreenPoint::new(200.0, 150.0), 1.00001),
        ZoomOutcome::Jitter
    );
    assert_eq!(controller.state(), ViewportState::default());
}

#[test]
fn zoom_out_at_unit_scale_is_clamped() {
    let mut controller = controller();
    assert_eq!(
        controller.apply_zoom(ScreenPoint::new(200.0, 150.0), 0.5),
        ZoomOutcome::Clamped
    );
    assert_eq!(controller.state(), ViewportState::default());
}

#[test]
fn zoom_in_stops_at_max_scale() {
    let mut controller = controller();
    let center = ScreenPoint::new(200.0, 150.0);
    for _ in 0..10 {
        controller.apply_zoom(center, 3.0);
    }
    assert_relative_eq!(controller.scale(), 20.0);
    assert_eq!(controller.apply_zoom(center, 3.0), ZoomOutcome::Clamped);
}

#[test]
fn zoom_then_inverse_zoom_restores_state() {
    let mut controller = controller();
    let focal = ScreenPoint::new(123.0, 77.0);

    assert_eq!(controller.apply_zoom(focal, 2.0), ZoomOutcome::Applied);
    assert_eq!(controller.apply_zoom(focal, 0.5), ZoomOutcome::Applied);

    let state = controller.state();
    assert_relative_eq!(state.scale, 1.0, epsilon = 1e-12);
    assert_relative_eq!(state.translation_x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.translation_y, 0.0, epsilon = 1e-9);
}

#[test]
fn pan_at_unit_scale_is_a_no_op() {
    let mut controller = controller();
    assert!(!controller.apply_pan(25.0, -40.0));
    assert_eq!(controller.state(), ViewportState::default());
}

#[test]
fn pan_clamps_exactly_to_translation_bounds() {
    let mut controller = controller();
    // Zoom around the right edge so translation starts at its minimum.
    controller.apply_zoom(ScreenPoint::new(400.0, 300.0), 2.0);
    let bounds = controller.translation_bounds();
    assert_relative_eq!(bounds.min_x, -400.0);
    assert_relative_eq!(bounds.max_y, 300.0);
    assert_relative_eq!(controller.state().translation_x, -400.0);

    assert!(controller.apply_pan(50.0, 0.0));
    assert_relative_eq!(controller.state().translation_x, -350.0);

    assert!(controller.apply_pan(-100.0, 0.0));
    assert_eq!(controller.state().translation_x, -400.0);

    assert!(controller.apply_pan(10_000.0, 10_000.0));
    assert_eq!(controller.state().translation_x, 0.0);
    assert_eq!(controller.state().translation_y, 300.0);

    assert!(!controller.apply_pan(50.0, 50.0));
}

#[test]
fn offset_plot_rect_clamps_relative_to_its_edges() {
    let mut controller = ViewportController::default();
    let rect = PlotRect::new(40.0, 10.0, 440.0, 210.0);
    controller.reset_for_new_bounds(rect, 10.0, 10.0, 200.0);
    controller.apply_zoom(ScreenPoint::new(240.0, 110.0), 2.0);

    let state = controller.state();
    let content_left = rect.left + state.translation_x;
    let content_right = content_left + rect.width() * state.scale;
    let content_bottom = rect.bottom + state.translation_y;
    let content_top = content_bottom - rect.height() * state.scale;
    assert!(content_left <= rect.left + 1e-9);
    assert!(content_right >= rect.right - 1e-9);
    assert!(content_top <= rect.top + 1e-9);
    assert!(content_bottom >= rect.bottom - 1e-9);
}

#[test]
fn engine_resize_resets_viewport() {
    let mut engine = dense_engine();
    let rect = engine.plot_rect();
    let center = ScreenPoint::new(
        (rect.left + rect.right) / 2.0,
        (rect.top + rect.bottom) / 2.0,
    );
    assert_eq!(engine.zoom_at(center, 3.0), ZoomOutcome::Applied);
    assert!(engine.pan_by(20.0, 0.0));

    engine.on_resize(1024, 768).expect("resize");
    assert_eq!(engine.viewport_state(), ViewportState::default());
    assert_eq!(engine.viewport(), Viewport::new(1024, 768));
}

#[test]
fn engine_reset_viewport_returns_to_unit_scale() {
    let mut engine = dense_engine();
    let rect = engine.plot_rect();
    engine.zoom_at(ScreenPoint::new(rect.left + 10.0, rect.top + 10.0), 4.0);
    assert!(engine.viewport_state().scale > 1.0);

    engine.reset_viewport();
    assert_eq!(engine.viewport_state(), ViewportState::default());
}

#[test]
fn engine_pan_is_no_op_at_unit_scale() {
    let mut engine = dense_engine();
    assert!(!engine.pan_by(30.0, 30.0));
    assert_eq!(engine.viewport_state(), ViewportState::default());
}
