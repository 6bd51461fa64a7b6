//! Integration tests for tabula-linalg.

#[cfg(test)]
mod integration_tests {
    use tabula_scalar::approx_eq;

    use crate::det::Determinant;
    use crate::matrix::Matrix;
    use crate::sequence;
    use crate::table::NumericTable;

    #[test]
    fn product_determinant_multiplies() {
        // det(A·B) = det(A)·det(B)
        let a = Matrix::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
        let b = Matrix::new(2, 2, vec![5.0, 6.0, 0.0, 2.0]).unwrap();
        let product = a.try_mul(&b).unwrap();

        let lhs = product.det().unwrap().elimination_value();
        let rhs = a.det().unwrap().elimination_value() * b.det().unwrap().elimination_value();
        assert!(approx_eq(lhs, rhs, 1e-9));
    }

    #[test]
    fn cramer_quotients_by_hand() {
        // The worked 2×2 system: D = 7, D1 = 14, D2 = -21.
        let d = Determinant::new(2, vec![3.0, 2.0, -2.0, 1.0]).unwrap();
        let d1 = Determinant::new(2, vec![12.0, 1.0, -2.0, 1.0]).unwrap();
        let d2 = Determinant::new(2, vec![3.0, 2.0, 12.0, 1.0]).unwrap();

        assert_eq!(d.expansion_value(), 7.0);
        assert_eq!(d1.expansion_value(), 14.0);
        assert_eq!(d2.expansion_value(), -21.0);

        assert!(approx_eq(d1.expansion_value() / d.expansion_value(), 2.0, 1e-9));
        assert!(approx_eq(d2.expansion_value() / d.expansion_value(), -3.0, 1e-9));
    }

    #[test]
    fn matrix_row_ops_match_sequence_ops() {
        let mut matrix = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let scaled = sequence::scale(&matrix.row(1).unwrap(), 3.0);
        matrix.scale_row(1, 3.0);
        assert_eq!(matrix.row(1), Some(scaled));

        let expected = sequence::add(
            &matrix.row(2).unwrap(),
            &sequence::scale(&matrix.row(1).unwrap(), -1.0),
        )
        .unwrap();
        matrix.add_scaled_row(2, 1, -1.0);
        assert_eq!(matrix.row(2), Some(expected));
    }

    #[test]
    fn concurrent_readers_share_a_table() {
        let table = NumericTable::new(3, 3, (1..=9).map(f64::from).collect()).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=3)
                .map(|row| {
                    let table = &table;
                    scope.spawn(move || table.row(row).map(|line| line.iter().sum::<f64>()))
                })
                .collect();

            let total: f64 = handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .sum();
            assert!(approx_eq(total, 45.0, 1e-9));
        });
    }

    #[test]
    fn dump_is_uniform_across_types() {
        let table = NumericTable::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let matrix = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let det = Determinant::new(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(table.to_string(), matrix.to_string());
        assert_eq!(table.to_string(), det.to_string());
    }
}
