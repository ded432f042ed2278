use gridplot::api::{
    InteractionInputBehavior, LayoutBehavior, PlotEngineConfig, PlotStyle, ZoomBehavior,
};
use gridplot::core::Viewport;
use gridplot::render::{Color, NullRenderer};
use gridplot::{PlotEngine, PlotError};

#[test]
fn config_json_round_trip_preserves_every_knob() {
    let config = PlotEngineConfig::new(Viewport::new(1024, 768))
        .with_max_grid_step_px(150.0)
        .with_label_overlap_margin(1.5)
        .with_zoom_behavior(ZoomBehavior {
            min_step_factor: 0.3,
            jitter_epsilon: 1e-3,
        })
        .with_interaction_behavior(InteractionInputBehavior {
            pan_enabled: true,
            pinch_enabled: false,
            pan_requires_plot_start: true,
        });

    let json = config.to_json_string_pretty().expect("serialize");
    let parsed = PlotEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = PlotEngineConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("minimal config");
    assert_eq!(parsed, PlotEngineConfig::new(Viewport::new(640, 480)));
    assert_eq!(parsed.max_grid_step_px, 200.0);
    assert_eq!(parsed.label_overlap_margin, 1.25);
    assert_eq!(parsed.zoom.min_step_factor, 0.25);
    assert!(!parsed.interaction.pan_requires_plot_start);
}

#[test]
fn partial_style_keeps_other_defaults() {
    let parsed = PlotEngineConfig::from_json_str(
        r#"{"viewport":{"width":640,"height":480},"style":{"label_font_size_px":16.0}}"#,
    )
    .expect("partial style");
    assert_eq!(parsed.style.label_font_size_px, 16.0);
    assert_eq!(
        parsed.style.grid_line_width,
        PlotStyle::default().grid_line_width
    );
}

#[test]
fn malformed_json_is_invalid_config() {
    let err = PlotEngineConfig::from_json_str("{").expect_err("truncated json");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn out_of_range_knobs_are_rejected() {
    let viewport = Viewport::new(640, 480);
    let invalid = [
        PlotEngineConfig::new(viewport).with_max_grid_step_px(0.0),
        PlotEngineConfig::new(viewport).with_label_overlap_margin(0.5),
        PlotEngineConfig::new(viewport).with_zoom_behavior(ZoomBehavior {
            min_step_factor: 1.0,
            jitter_epsilon: 1e-4,
        }),
        PlotEngineConfig::new(viewport).with_layout(LayoutBehavior {
            padding_px: -1.0,
            ..LayoutBehavior::default()
        }),
        PlotEngineConfig::new(viewport).with_style(PlotStyle {
            label_font_size_px: 0.0,
            ..PlotStyle::default()
        }),
        PlotEngineConfig::new(viewport).with_style(PlotStyle {
            grid_line_color: Color::rgb(1.5, 0.0, 0.0),
            ..PlotStyle::default()
        }),
    ];
    for config in invalid {
        assert!(config.validate().is_err(), "{config:?} should be rejected");
        assert!(PlotEngine::new(NullRenderer::default(), config).is_err());
    }
}

#[test]
fn zero_size_viewport_is_a_valid_starting_config() {
    let config = PlotEngineConfig::new(Viewport::new(0, 0));
    assert!(config.validate().is_ok());
    assert!(PlotEngine::new(NullRenderer::default(), config).is_ok());
}

#[test]
fn engine_rejects_invalid_zoom_behavior_update() {
    let config = PlotEngineConfig::new(Viewport::new(640, 480));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    let err = engine
        .set_zoom_behavior(ZoomBehavior {
            min_step_factor: -0.5,
            jitter_epsilon: 1e-4,
        })
        .expect_err("negative minimal step");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
    assert_eq!(engine.zoom_behavior(), ZoomBehavior::default());
}

#[test]
fn style_update_triggers_relayout() {
    let config = PlotEngineConfig::new(Viewport::new(640, 480));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_points([(0_i64, 0_i64), (100, 100)]).expect("points");
    let before = engine.plot_rect();

    engine
        .set_style(PlotStyle {
            label_font_size_px: 24.0,
            ..PlotStyle::default()
        })
        .expect("style");
    let after = engine.plot_rect();
    assert!(after.left > before.left);
    assert!(after.bottom < before.bottom);
}

#[test]
fn interaction_behavior_update_is_stored() {
    let config = PlotEngineConfig::new(Viewport::new(640, 480));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    let behavior = InteractionInputBehavior {
        pan_enabled: false,
        ..InteractionInputBehavior::default()
    };
    engine.set_interaction_input_behavior(behavior);
    assert_eq!(engine.interaction_input_behavior(), behavior);
    assert_eq!(engine.config().interaction, behavior);
}
