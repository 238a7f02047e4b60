//! Build a small constraint matrix row by row and column by column

use dcsr::{DcsrMatrix, MatrixConfig, Result, SparseVector};

fn main() -> Result<()> {
    let config = MatrixConfig::default().with_segment_size(2);
    let mut matrix = DcsrMatrix::from_config(config)?;

    // Two constraints over three variables
    let constraints: [&[(usize, f64)]; 2] = [&[(0, 1.0), (1, 2.0), (2, -1.0)], &[(1, 3.0)]];
    for coefficients in constraints {
        let row: SparseVector = coefficients.iter().copied().collect();
        matrix.append_row(&row);
    }

    // New variables entering existing constraints, then a third constraint
    for step in 0..3 {
        let column: SparseVector = [(0, 0.5 + step as f64), (2, 4.0)].into_iter().collect();
        let col = matrix.append_column(&column);
        println!("Added variable {col}, consistent = {}", matrix.is_consistent());
    }

    println!("{}\n", matrix.dump());

    matrix.defragment();
    println!("After defragmentation:\n{}\n", matrix.dump());

    println!("Row 0:\n{}", matrix.get_row(0)?);
    println!("Column 4:\n{}", matrix.get_column(4)?);
    Ok(())
}
