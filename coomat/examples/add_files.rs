//! Simple example to load two sparse matrices from text files and add them

use coomat::{load_matrix, CooMatrix, FileSource, LoadError};

fn main() -> Result<(), LoadError> {
    let mut args = std::env::args().skip(1);
    let (path_a, path_b) = match (args.next(), args.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            println!("Usage: add_files <matrix_a.txt> <matrix_b.txt>");
            println!("   Each file uses the rows=/cols= header followed by (r,c,v) lines");
            return Ok(());
        }
    };

    let source = FileSource::new();

    println!("Loading '{path_a}' and '{path_b}'...");
    let a: CooMatrix = load_matrix(&source, &path_a)?;
    let b: CooMatrix = load_matrix(&source, &path_b)?;

    println!(
        "   A: {} x {} with {} non-zeros",
        a.nrows(),
        a.ncols(),
        a.nnz()
    );
    println!(
        "   B: {} x {} with {} non-zeros",
        b.nrows(),
        b.ncols(),
        b.nnz()
    );

    let sum = a.add(&b)?;

    println!("\nSum: {} x {} with {} non-zeros", sum.nrows(), sum.ncols(), sum.nnz());
    for (row, col, value) in sum.iter() {
        println!("   ({row},{col}) = {value}");
    }

    Ok(())
}
