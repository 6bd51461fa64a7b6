//! Property-based tests for the table and determinant layers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use tabula_scalar::approx_eq;

    use crate::det::Determinant;
    use crate::matrix::Matrix;
    use crate::table::NumericTable;

    fn dims() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=4, 1usize..=4)
    }

    fn entries(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-10.0f64..10.0, len)
    }

    proptest! {
        #[test]
        fn transpose_round_trips((rows, cols) in dims(), seed in entries(16)) {
            let table = NumericTable::new(rows, cols, seed[..rows * cols].to_vec()).unwrap();
            prop_assert_eq!(table.transpose().transpose(), table);
        }

        #[test]
        fn set_get_round_trips((rows, cols) in dims(), value in -100.0f64..100.0) {
            let mut table = NumericTable::new(rows, cols, Vec::new()).unwrap();
            table.set(rows, cols, value);
            prop_assert_eq!(table.get(rows, cols), Some(value));
        }

        #[test]
        fn mismatched_set_row_changes_nothing((rows, cols) in dims(), seed in entries(16)) {
            let mut table = NumericTable::new(rows, cols, seed[..rows * cols].to_vec()).unwrap();
            let before = table.clone();
            table.set_row(1, &vec![1.0; cols + 1]);
            prop_assert_eq!(table, before);
        }

        #[test]
        fn determinant_algorithms_agree(order in 1usize..=4, seed in entries(16)) {
            let det = Determinant::new(order, seed[..order * order].to_vec()).unwrap();
            let expansion = det.expansion_value();
            let elimination = det.elimination_value();
            let tolerance = 1e-6 * (1.0 + expansion.abs());
            prop_assert!(
                approx_eq(expansion, elimination, tolerance),
                "expansion {} vs elimination {}",
                expansion,
                elimination
            );
        }

        #[test]
        fn inverse_identity(order in 2usize..=3, seed in entries(9)) {
            let matrix = Matrix::new(order, order, seed[..order * order].to_vec()).unwrap();
            let det_value = matrix.det().unwrap().elimination_value();
            prop_assume!(det_value.abs() > 0.5);

            let inverse = matrix.inverse().unwrap();
            let product = matrix.try_mul(&inverse).unwrap();
            for i in 1..=order {
                for j in 1..=order {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!(approx_eq(product.get(i, j).unwrap(), expected, 1e-6));
                }
            }
        }
    }
}
