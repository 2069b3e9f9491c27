use approx::assert_relative_eq;
use barchart_rs::api::{BarChartConfig, compute_layout};
use barchart_rs::core::{Density, GraphItem, HeuristicTextMeasurer, Viewport};

fn items(values: &[u32]) -> Vec<GraphItem> {
    values.iter().copied().map(GraphItem::new).collect()
}

fn reference_config() -> BarChartConfig {
    BarChartConfig::default()
        .with_axis(100, 5)
        .with_grid_line_spacing(25.0)
        .with_bar_width(25.0)
}

#[test]
fn five_bars_share_leftover_width_in_equal_gaps() {
    let config = reference_config();
    let layout = compute_layout(
        &config,
        &items(&[1, 2, 3, 4, 5]),
        Viewport::new(300, 500),
        Density::ONE,
        &HeuristicTextMeasurer,
    )
    .expect("valid layout");

    // (300 - 25*5) / 6 = 29, truncating.
    assert_eq!(layout.axis_margin_px, 0);
    assert_eq!(layout.bars[0].x_px, 29);
    for pair in layout.bars.windows(2) {
        assert_eq!(pair[1].x_px - pair[0].x_px, 25 + 29);
    }
}

#[test]
fn heights_follow_unit_ratio_plus_remainder() {
    let config = reference_config();
    let layout = compute_layout(
        &config,
        &items(&[20, 77, 58, 34, 3, 17, 80, 18, 90]),
        Viewport::new(600, 500),
        Density::ONE,
        &HeuristicTextMeasurer,
    )
    .expect("valid layout");

    let heights: Vec<f64> = layout.bars.iter().map(|bar| bar.height_px).collect();
    assert_eq!(heights[0], 100.0);
    assert_eq!(heights[1], 15.0 * 25.0 + 2.0 * 4.5);
    assert_relative_eq!(heights[2], 288.5);
    assert_relative_eq!(heights[4], 13.5);
    assert_eq!(heights[6], 400.0);

    // Bars keep input order left to right.
    let values: Vec<u32> = layout.bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![20, 77, 58, 34, 3, 17, 80, 18, 90]);
}

#[test]
fn empty_input_places_no_bars() {
    let config = reference_config();
    let layout = compute_layout(
        &config,
        &[],
        Viewport::new(300, 500),
        Density::ONE,
        &HeuristicTextMeasurer,
    )
    .expect("valid layout");

    assert!(layout.bars.is_empty());
    assert_eq!(layout.grid.line_count(), 21);
}

#[test]
fn overflowing_bars_overlap_without_error() {
    let config = reference_config().with_bar_width(80.0);
    let layout = compute_layout(
        &config,
        &items(&[1, 2, 3, 4, 5]),
        Viewport::new(300, 500),
        Density::ONE,
        &HeuristicTextMeasurer,
    )
    .expect("overlap is accepted, not guarded");

    let first = &layout.bars[0];
    let second = &layout.bars[1];
    assert!(second.x_px < first.x_px + first.width_px);
}

#[test]
fn zero_value_yields_zero_height_bar() {
    let config = reference_config();
    let layout = compute_layout(
        &config,
        &items(&[0]),
        Viewport::new(300, 500),
        Density::ONE,
        &HeuristicTextMeasurer,
    )
    .expect("valid layout");

    assert_eq!(layout.bars[0].height_px, 0.0);
}

#[test]
fn identical_inputs_produce_identical_layouts() {
    let config = reference_config().with_labels(true, true);
    let data = items(&[20, 77, 58, 34, 3]);
    let viewport = Viewport::new(400, 500);

    let first = compute_layout(&config, &data, viewport, Density::ONE, &HeuristicTextMeasurer)
        .expect("first pass");
    let second = compute_layout(&config, &data, viewport, Density::ONE, &HeuristicTextMeasurer)
        .expect("second pass");

    assert_eq!(first, second);
}
