//! Build a sparse matrix from feature-string rows and run a matvec over it

use csrkit::{
    matvec, BuilderConfig, CsrMatrixBuilder, DataType, DynamicMatrixBuilder, MatrixBuilder, Result,
};
use std::time::Instant;

fn main() -> Result<()> {
    let rows = [
        vec!["0:1.5", "3:2", "7"],
        vec![],
        vec!["2:0", "5:-4.25"],
        vec!["1", "1:3", "6:0.5"],
    ];

    let config = BuilderConfig::with_capacity(16).with_expected_rows(rows.len());
    let mut builder = CsrMatrixBuilder::<f64>::with_config(config);
    for features in &rows {
        builder.append_sparse_row(features.as_slice())?;
    }
    let matrix = builder.build_matrix(true)?;

    println!(
        "Built {}x{} matrix with {} non-zeros (density {:.3})",
        matrix.num_rows(),
        matrix.num_columns(),
        matrix.nnz(),
        matrix.density()
    );
    for row in matrix.rows() {
        let entries: Vec<_> = row.iter().collect();
        println!("  row {}: {entries:?}", row.index());
    }

    let dense = vec![1.0; matrix.num_columns()];
    println!("A * 1 = {:?}", matvec(&matrix, &dense)?);

    // Same rows through the runtime-typed builder, truncated to integers
    let mut dynamic = DynamicMatrixBuilder::new(DataType::I32, 16)?;
    for features in &rows {
        dynamic.append_sparse_row(features.as_slice())?;
    }
    let ints = dynamic.build_matrix(true)?;
    println!("As {}: {} non-zeros", ints.data_type(), ints.nnz());

    // Larger synthetic build for a rough timing
    let start = Instant::now();
    let mut builder = CsrMatrixBuilder::<f32>::new(1_000_000);
    for row in 0..100_000i64 {
        builder.start_row()?;
        for k in 0..10 {
            builder.append_entry((row * 7 + k * 131) % 20_000, 1.0 + k as f32)?;
        }
    }
    let large = builder.into_matrix()?;
    println!(
        "Built {}x{} with {} non-zeros in {:?}",
        large.num_rows(),
        large.num_columns(),
        large.nnz(),
        start.elapsed()
    );
    Ok(())
}
