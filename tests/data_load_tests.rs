use gridplot::api::{LoadDelivery, PlotEngineConfig};
use gridplot::core::{DataPoint, Viewport, ViewportState};
use gridplot::error::LoadError;
use gridplot::render::NullRenderer;
use gridplot::{PlotEngine, PlotError};
use std::path::PathBuf;

fn build_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(Viewport::new(640, 480));
    PlotEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn points(raw: &[(i64, i64)]) -> Vec<DataPoint> {
    raw.iter().copied().map(DataPoint::from).collect()
}

#[test]
fn set_points_sorts_and_drops_duplicates() {
    let mut engine = build_engine();
    engine
        .set_points(points(&[(3, 1), (1, 2), (3, 1), (1, -5)]))
        .expect("points should install");
    assert_eq!(engine.points(), points(&[(1, -5), (1, 2), (3, 1)]).as_slice());
}

#[test]
fn set_points_resets_viewport() {
    let mut engine = build_engine();
    engine
        .set_points((0..=50).map(|x| DataPoint::new(x, x)))
        .expect("points should install");
    let rect = engine.plot_rect();
    engine.zoom_at(
        gridplot::core::ScreenPoint::new(rect.left + 5.0, rect.bottom - 5.0),
        3.0,
    );
    assert!(engine.viewport_state().scale > 1.0);

    engine
        .set_points(points(&[(0, 0), (1, 1)]))
        .expect("points should install");
    assert_eq!(engine.viewport_state(), ViewportState::default());
}

#[test]
fn empty_point_set_clears_bounds() {
    let mut engine = build_engine();
    engine
        .set_points(points(&[(0, 0), (1, 1)]))
        .expect("points should install");
    engine
        .set_points(Vec::<DataPoint>::new())
        .expect("empty set is valid");
    assert!(engine.axis_bounds().is_none());
    assert!(engine.plot_rect().is_empty());
}

#[test]
fn current_ticket_delivery_installs_points() {
    let mut engine = build_engine();
    let ticket = engine.begin_load();
    assert_eq!(engine.pending_load(), Some(ticket));

    let delivery = engine
        .deliver_load(ticket, Ok(points(&[(2, 2), (0, 0), (2, 2)])))
        .expect("delivery");
    assert_eq!(delivery, LoadDelivery::Applied { points_len: 2 });
    assert_eq!(engine.points(), points(&[(0, 0), (2, 2)]).as_slice());
    assert_eq!(engine.pending_load(), None);
}

#[test]
fn superseded_ticket_is_discarded() {
    let mut engine = build_engine();
    let first = engine.begin_load();
    let second = engine.begin_load();
    assert!(second.generation() > first.generation());

    let delivery = engine
        .deliver_load(first, Ok(points(&[(9, 9)])))
        .expect("stale delivery is not an error");
    assert_eq!(delivery, LoadDelivery::Stale);
    assert!(engine.points().is_empty());

    let delivery = engine
        .deliver_load(second, Ok(points(&[(1, 1)])))
        .expect("delivery");
    assert_eq!(delivery, LoadDelivery::Applied { points_len: 1 });
}

#[test]
fn ticket_delivers_at_most_once() {
    let mut engine = build_engine();
    let ticket = engine.begin_load();
    engine
        .deliver_load(ticket, Ok(points(&[(1, 1)])))
        .expect("delivery");

    let again = engine
        .deliver_load(ticket, Ok(points(&[(5, 5)])))
        .expect("second delivery");
    assert_eq!(again, LoadDelivery::Stale);
    assert_eq!(engine.points(), points(&[(1, 1)]).as_slice());
}

#[test]
fn direct_set_points_invalidates_pending_load() {
    let mut engine = build_engine();
    let ticket = engine.begin_load();
    engine
        .set_points(points(&[(4, 4)]))
        .expect("points should install");

    let delivery = engine
        .deliver_load(ticket, Ok(points(&[(0, 0)])))
        .expect("stale delivery");
    assert_eq!(delivery, LoadDelivery::Stale);
    assert_eq!(engine.points(), points(&[(4, 4)]).as_slice());
}

#[test]
fn failed_load_is_reported_and_keeps_old_points() {
    let mut engine = build_engine();
    engine
        .set_points(points(&[(1, 1), (2, 3)]))
        .expect("points should install");

    let ticket = engine.begin_load();
    let err = engine
        .deliver_load(
            ticket,
            Err(LoadError::NotFound {
                path: PathBuf::from("missing.csv"),
            }),
        )
        .expect_err("load failure surfaces");
    assert!(matches!(err, PlotError::Load(LoadError::NotFound { .. })));
    assert_eq!(engine.points(), points(&[(1, 1), (2, 3)]).as_slice());
    assert_eq!(engine.pending_load(), None);
}

#[test]
fn stale_failure_is_silently_discarded() {
    let mut engine = build_engine();
    let stale = engine.begin_load();
    let _current = engine.begin_load();

    let delivery = engine
        .deliver_load(
            stale,
            Err(LoadError::Format {
                line: 1,
                content: "x".to_owned(),
            }),
        )
        .expect("stale failures are not reported");
    assert_eq!(delivery, LoadDelivery::Stale);
}

#[test]
fn failed_set_points_keeps_pending_load() {
    let mut engine = build_engine();
    engine
        .set_points(points(&[(0, 0), (1, 1)]))
        .expect("points should install");
    let ticket = engine.begin_load();

    let err = engine
        .set_points(points(&[(0, 0), (0, 50_000_000)]))
        .expect_err("span exceeds max_axis_ticks");
    assert!(matches!(err, PlotError::AxisSpanTooLarge { .. }));
    assert_eq!(engine.pending_load(), Some(ticket));

    let delivery = engine
        .deliver_load(ticket, Ok(points(&[(3, 3)])))
        .expect("delivery");
    assert_eq!(delivery, LoadDelivery::Applied { points_len: 1 });
}
