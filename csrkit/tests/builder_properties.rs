//! Randomized checks of the builder contract against a naive row model

use csrkit::{
    CsrError, CsrMatrixBuilder, ErrorCategory, MatrixBuilder, MatrixOperations, ReadOnlyCsrMatrix,
    SparseMatrix,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rows of `(column, value)` pairs exactly as appended
type Model = Vec<Vec<(i64, f64)>>;

/// Random input with roughly a third zero values
fn random_model(rng: &mut StdRng) -> Model {
    let rows = rng.gen_range(1..40);
    (0..rows)
        .map(|_| {
            let len = rng.gen_range(0..12);
            (0..len)
                .map(|_| {
                    let col = rng.gen_range(0..64);
                    let value = if rng.gen_bool(0.3) {
                        0.0
                    } else {
                        rng.gen_range(-100.0..100.0)
                    };
                    (col, value)
                })
                .collect()
        })
        .collect()
}

fn build(model: &Model) -> (CsrMatrixBuilder<f64>, ReadOnlyCsrMatrix<f64>) {
    let mut builder = CsrMatrixBuilder::<f64>::new(8);
    for row in model {
        builder.start_row().unwrap();
        for &(col, value) in row {
            builder.append_entry(col, value).unwrap();
        }
    }
    let matrix = builder.build_matrix(true).unwrap();
    (builder, matrix)
}

fn stored(row: &[(i64, f64)]) -> Vec<(u32, f64)> {
    row.iter()
        .filter(|(_, value)| *value != 0.0)
        .map(|&(col, value)| (col as u32, value))
        .collect()
}

#[test]
fn rows_and_nnz_follow_the_calls() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let model = random_model(&mut rng);
        let (_, matrix) = build(&model);

        let expected_nnz = model.iter().map(|row| stored(row).len()).sum::<usize>();
        assert_eq!(matrix.num_rows(), model.len());
        assert_eq!(matrix.nnz(), expected_nnz);

        for (i, row) in model.iter().enumerate() {
            let actual: Vec<_> = matrix.row(i).unwrap().into_iter().collect();
            assert_eq!(actual, stored(row));
        }
    }
}

#[test]
fn num_columns_is_one_past_max_accepted_column() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let model = random_model(&mut rng);
        let (_, matrix) = build(&model);

        let expected = model
            .iter()
            .flat_map(|row| stored(row))
            .map(|(col, _)| col as usize + 1)
            .max()
            .unwrap_or(0);
        assert_eq!(matrix.num_columns(), expected);
    }
}

#[test]
fn zero_appends_change_nothing() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..100 {
        let model = random_model(&mut rng);
        let (_, reference) = build(&model);

        let padded: Model = model
            .iter()
            .map(|row| {
                let mut padded = Vec::new();
                for &entry in row {
                    for _ in 0..rng.gen_range(0..3) {
                        padded.push((rng.gen_range(0..1_000), 0.0));
                    }
                    padded.push(entry);
                }
                padded.push((999, -0.0));
                padded
            })
            .collect();
        let (_, matrix) = build(&padded);

        assert_eq!(matrix, reference);
    }
}

#[test]
fn round_trip() {
    let model = vec![vec![(0, 1.0), (2, 3.0)], vec![(1, 5.0)]];
    let (_, matrix) = build(&model);

    assert_eq!(matrix.num_rows(), 2);
    assert_eq!(matrix.num_columns(), 3);
    assert_eq!(matrix.nnz(), 3);
    assert_eq!(matrix.get_row(0), vec![1.0, 3.0]);
    assert_eq!(matrix.row(0).unwrap().columns(), &[0, 2]);
    assert_eq!(matrix.row(1).unwrap().columns(), &[1]);
    assert_eq!(matrix.get(1, 1), Ok(5.0));
}

#[test]
fn empty_builder_has_one_empty_row() {
    let mut builder = CsrMatrixBuilder::<f64>::new(0);
    let matrix = builder.build_matrix(true).unwrap();

    assert_eq!(matrix.dimensions(), (1, 0));
    assert_eq!(matrix.nnz(), 0);
    assert_eq!(matrix.row_offsets(), &[0, 0]);
}

#[test]
fn mutable_build_is_rejected_in_any_state() {
    let mut builder = CsrMatrixBuilder::<f64>::new(4);
    let err = builder.build_matrix(false).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnsupportedOperation);

    builder.start_row().unwrap().append_entry(2, 1.0).unwrap();
    let before = builder.clone();
    assert!(builder.build_matrix(false).is_err());
    assert_eq!(builder.nnz(), before.nnz());
    assert_eq!(builder.num_rows(), before.num_rows());
    assert!(!builder.is_finalized());

    builder.build_matrix(true).unwrap();
    let err = builder.build_matrix(false).unwrap_err();
    assert_eq!(err, CsrError::MutableMatrixUnsupported);
}

#[test]
fn rejected_column_leaves_no_trace() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let model = random_model(&mut rng);
        let (_, reference) = build(&model);

        let mut builder = CsrMatrixBuilder::<f64>::new(8);
        for row in &model {
            builder.start_row().unwrap();
            let err = builder.append_entry(-rng.gen_range(1..100), 5.0).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidArgument);
            for &(col, value) in row {
                builder.append_entry(col, value).unwrap();
            }
        }
        assert_eq!(builder.build_matrix(true).unwrap(), reference);
    }
}

#[test]
fn finalized_builder_rejects_everything() {
    let mut builder = CsrMatrixBuilder::<f64>::new(4);
    builder.start_row().unwrap().append_entry(0, 1.0).unwrap();
    builder.build_matrix(true).unwrap();

    for err in [
        builder.start_row().map(|_| ()).unwrap_err(),
        builder.append_entry(0, 1.0).map(|_| ()).unwrap_err(),
        builder.append_feature("1:2").map(|_| ()).unwrap_err(),
        builder.build_matrix(true).map(|_| ()).unwrap_err(),
    ] {
        assert_eq!(err, CsrError::BuilderFinalized);
        assert!(err.is_illegal_state());
    }
}

#[test]
fn duplicate_columns_are_kept_and_first_wins() {
    let mut builder = CsrMatrixBuilder::<f64>::new(4);
    builder.start_row().unwrap();
    builder.append_entry(3, 1.0).unwrap().append_entry(3, 2.0).unwrap();
    let matrix = builder.build_matrix(true).unwrap();

    assert_eq!(matrix.nnz(), 2);
    assert_eq!(matrix.get(0, 3), Ok(1.0));
    assert_eq!(matrix.get_element(0, 3), Some(1.0));
    assert!(matrix.has_duplicate_columns());
}

#[test]
fn matrix_does_not_alias_builder() {
    let mut builder = CsrMatrixBuilder::<f64>::new(64);
    builder.start_row().unwrap().append_entry(1, 1.0).unwrap();
    builder.append_entry(4, 2.0).unwrap();
    let builder_values = builder.values().as_ptr();
    let builder_columns = builder.column_indices().as_ptr();

    let matrix = builder.build_matrix(true).unwrap();
    assert_ne!(matrix.values().as_ptr(), builder_values);
    assert_ne!(matrix.column_indices().as_ptr(), builder_columns);

    // the builder keeps its own buffers after finalize
    assert_eq!(builder.values().as_ptr(), builder_values);
    assert_eq!(builder.values(), matrix.values());
    assert_eq!(builder.column_indices(), matrix.column_indices());

    drop(builder);
    assert_eq!(matrix.values(), &[1.0, 2.0]);
    assert_eq!(matrix.column_indices(), &[1, 4]);
}

#[test]
fn feature_rows_match_explicit_appends() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let model = random_model(&mut rng);
        let (_, reference) = build(&model);

        let mut builder = CsrMatrixBuilder::<f64>::new(8);
        for row in &model {
            let features: Vec<String> = row
                .iter()
                .map(|(col, value)| {
                    if *value == 1.0 {
                        col.to_string()
                    } else {
                        format!("{col}:{value:?}")
                    }
                })
                .collect();
            builder.append_sparse_row(features.as_slice()).unwrap();
        }
        assert_eq!(builder.build_matrix(true).unwrap(), reference);
    }
}
