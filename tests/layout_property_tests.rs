use barchart_rs::core::{bar_gap_px, bar_height_px};
use proptest::prelude::*;

proptest! {
    // Spacing is kept at least (y_unit - 1) sub-unit steps so crossing a unit
    // boundary never reduces height.
    #[test]
    fn bar_height_is_monotone_in_value(
        y_unit in 1u32..=6,
        value in 0u32..1_000,
        delta in 0u32..100,
    ) {
        let spacing_px = 30.0;
        let step_px = 4.5;
        let low = bar_height_px(value, y_unit, spacing_px, step_px).expect("valid height");
        let high = bar_height_px(value + delta, y_unit, spacing_px, step_px).expect("valid height");
        prop_assert!(high >= low);
    }

    #[test]
    fn zero_value_is_always_flat(y_unit in 1u32..1_000) {
        let height = bar_height_px(0, y_unit, 30.0, 4.5).expect("valid height");
        prop_assert_eq!(height, 0.0);
    }

    #[test]
    fn gaps_are_equal_non_negative_and_fill_the_width(
        count in 1usize..50,
        bar_width in 1i32..40,
        slack in 0i32..500,
    ) {
        let usable = bar_width * count as i32 + slack;
        let gap = bar_gap_px(count, bar_width, usable);

        prop_assert!(gap >= 0);
        let consumed = gap * (count as i32 + 1) + bar_width * count as i32;
        prop_assert!(consumed <= usable);
        // Only the truncation remainder is left over.
        prop_assert!(usable - consumed < count as i32 + 1);
    }

    #[test]
    fn remainder_steps_stay_below_one_spacing(
        value in 0u32..1_000,
        y_unit in 1u32..=6,
    ) {
        let spacing_px = 30.0;
        let step_px = 4.5;
        let height = bar_height_px(value, y_unit, spacing_px, step_px).expect("valid height");
        let whole_units = f64::from(value / y_unit) * spacing_px;
        prop_assert!(height >= whole_units);
        prop_assert!(height - whole_units <= f64::from(y_unit - 1) * step_px);
    }
}
