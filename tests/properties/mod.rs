//! Shape invariants checked on written files and, with random seeds, on the builders directly.

use det_fixture_gen::{Matrix, SeededSource, ShapeRecipe};
use proptest::prelude::*;

use crate::support::{generate_into, read_case};

fn expected_diagonal_determinant(size: usize) -> i64 {
    if size >= 50 { 1 } else { 1 << (size / 2) }
}

fn assert_singular_rows(matrix: &Matrix) {
    let mut rows = matrix.rows();
    assert_eq!(rows.next(), rows.next(), "rows 0 and 1 must be identical");
}

#[test]
fn written_files_satisfy_the_shape_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let (_, records) = generate_into(dir.path(), 5);

    for record in &records {
        let case = read_case(dir.path(), record.index);
        let matrix = case.matrix();
        let det = case.determinant().value();

        assert_eq!(det, record.determinant, "fixture {:03}", record.index);
        assert_eq!(matrix.size(), record.size, "fixture {:03}", record.index);

        match record.description.as_str() {
            "diagonal" => {
                assert_eq!(det, expected_diagonal_determinant(record.size));
                assert!(matrix.is_upper_triangular());
            }
            "identity" => {
                assert_eq!(det, 1);
                assert!(matrix.diagonal().all(|v| v == 1));
            }
            "singular" => {
                assert_singular_rows(matrix);
                assert_eq!(det, 0);
            }
            "upper triangular" => {
                assert!(matrix.is_upper_triangular());
                assert_eq!(Some(det), matrix.diagonal_product());
            }
            known => assert!(known.starts_with('('), "unexpected description {known}"),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn singular_shape_always_duplicates_row_zero(
        size in 2usize..60,
        seed in any::<u64>(),
    ) {
        let case = ShapeRecipe::Singular { size }
            .build(&mut SeededSource::from_seed(seed))
            .unwrap();

        prop_assert_eq!(case.matrix().row(0), case.matrix().row(1));
        prop_assert!(case.matrix().entries().iter().all(|v| (1..10).contains(v)));
        prop_assert_eq!(case.determinant().value(), 0);
    }

    #[test]
    fn triangular_determinant_is_the_diagonal_product(
        size in 2usize..40,
        seed in any::<u64>(),
    ) {
        let case = ShapeRecipe::Triangular { size }
            .build(&mut SeededSource::from_seed(seed))
            .unwrap();
        let matrix = case.matrix();

        prop_assert!(matrix.is_upper_triangular());
        prop_assert_eq!(Some(case.determinant().value()), matrix.diagonal_product());
        prop_assert!(case.determinant().value() != 0);
        if size > 10 {
            prop_assert_eq!(case.determinant().value(), 1);
        }
    }

    #[test]
    fn diagonal_determinant_follows_the_size(size in 2usize..120) {
        let case = ShapeRecipe::Diagonal { size }
            .build(&mut SeededSource::from_seed(0))
            .unwrap();

        prop_assert_eq!(case.determinant().value(), expected_diagonal_determinant(size));
        prop_assert_eq!(case.matrix().diagonal_product(), Some(case.determinant().value()));
    }
}
