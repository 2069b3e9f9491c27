use barchart_rs::api::{BarChart, BarChartConfig, build_render_frame};
use barchart_rs::core::{Density, HeuristicTextMeasurer, Viewport};
use barchart_rs::render::NullRenderer;

fn reference_config() -> BarChartConfig {
    BarChartConfig::default()
        .with_axis(100, 5)
        .with_grid_line_spacing(25.0)
        .with_bar_width(25.0)
}

const REFERENCE_VALUES: [u32; 9] = [20, 77, 58, 34, 3, 17, 80, 18, 90];

#[test]
fn render_pass_emits_one_primitive_per_layout_element() {
    let mut chart =
        BarChart::new(NullRenderer::default(), reference_config()).expect("valid chart");
    chart.set_values(&REFERENCE_VALUES);

    chart
        .render(Viewport::new(600, 500), Density::ONE, &HeuristicTextMeasurer)
        .expect("render pass");

    let stats = chart.renderer();
    assert_eq!(stats.last_line_count, 21);
    assert_eq!(stats.last_rect_count, 9);
    assert_eq!(stats.last_text_count, 0);
}

#[test]
fn axis_labels_add_one_text_per_gridline() {
    let config = reference_config().with_labels(true, false);
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("valid chart");
    chart.set_values(&REFERENCE_VALUES);

    chart
        .render(Viewport::new(600, 500), Density::ONE, &HeuristicTextMeasurer)
        .expect("render pass");

    assert_eq!(chart.renderer().last_text_count, 21);
}

#[test]
fn bar_values_label_only_bars_that_fit() {
    let config = reference_config().with_labels(false, true);
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("valid chart");
    chart.set_values(&REFERENCE_VALUES);

    chart
        .render(Viewport::new(600, 500), Density::ONE, &HeuristicTextMeasurer)
        .expect("render pass");

    // The value-3 bar is 13.5 px tall, too short for its label.
    assert_eq!(chart.renderer().last_text_count, 8);
}

#[test]
fn empty_input_renders_grid_only() {
    let mut chart =
        BarChart::new(NullRenderer::default(), reference_config()).expect("valid chart");

    chart
        .render(Viewport::new(600, 500), Density::ONE, &HeuristicTextMeasurer)
        .expect("render pass");

    let stats = chart.renderer();
    assert_eq!(stats.last_line_count, 21);
    assert_eq!(stats.last_rect_count, 0);
}

#[test]
fn repeated_passes_build_identical_frames() {
    let config = reference_config().with_labels(true, true);
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("valid chart");
    let viewport = Viewport::new(600, 500);
    chart.set_values(&REFERENCE_VALUES);

    let layout_a = chart
        .layout(viewport, Density::ONE, &HeuristicTextMeasurer)
        .expect("first layout");
    let layout_b = chart
        .layout(viewport, Density::ONE, &HeuristicTextMeasurer)
        .expect("second layout");
    assert_eq!(layout_a, layout_b);

    let frame_a =
        build_render_frame(&layout_a, chart.config(), Density::ONE).expect("first frame");
    let frame_b =
        build_render_frame(&layout_b, chart.config(), Density::ONE).expect("second frame");
    assert_eq!(frame_a, frame_b);
}

#[test]
fn invalid_viewport_is_rejected() {
    let mut chart =
        BarChart::new(NullRenderer::default(), reference_config()).expect("valid chart");

    let result = chart.render(Viewport::new(0, 0), Density::ONE, &HeuristicTextMeasurer);
    assert!(result.is_err());
}

#[test]
fn invalid_config_is_rejected_on_update() {
    let mut chart =
        BarChart::new(NullRenderer::default(), reference_config()).expect("valid chart");

    let broken = reference_config().with_axis(100, 0);
    assert!(chart.set_config(broken).is_err());
    // The previous config stays in place.
    assert_eq!(chart.config().y_unit, 5);
}

#[test]
fn chart_height_follows_axis_configuration() {
    let chart = BarChart::new(NullRenderer::default(), reference_config()).expect("valid chart");
    let height = chart.chart_height_px(Density::ONE).expect("valid height");
    assert_eq!(height, 500.0);

    let density = Density::new(2.0).expect("valid density");
    let height = chart.chart_height_px(density).expect("valid height");
    assert_eq!(height, 1000.0);
}
