use chart_layout::core::{DataSet, stack};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_negative_stacks_grow_towards_the_first_series(
        rows in prop::collection::vec(prop::collection::vec(0.0f64..1_000.0, 4), 1..6)
    ) {
        let data: DataSet = rows
            .iter()
            .enumerate()
            .map(|(i, values)| (format!("s{i}"), values.clone()))
            .collect();
        let stacked = stack(&data).expect("aligned series stack");

        for index in 0..4 {
            let column: Vec<f64> = stacked
                .stacked()
                .iter()
                .map(|(_, series)| series.get(index).expect("value"))
                .collect();
            for pair in column.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
            let total: f64 = rows.iter().map(|values| values[index]).sum();
            prop_assert!((column[0] - total).abs() <= 1e-9);
        }
    }
}
