use std::env;

use par_matrix::{Config, Engine, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).cloned().unwrap_or_else(|| "demo".to_string());

    let engine = Engine::new(Config::from_env()?);
    println!("Using {} worker threads", engine.threads());

    match mode.as_str() {
        "demo" => {
            let a = Matrix::from_rows(&[[1u32, 2], [3, 4]])?;
            let b = Matrix::from_rows(&[[5u32, 6], [7, 8]])?;

            println!("Matrix A:");
            print!("{a}");
            println!("Matrix B:");
            print!("{b}");
            println!("A + 4:");
            print!("{}", engine.scalar_add(&a, 4)?);
            println!("A x B:");
            print!("{}", engine.multiply(&a, &b)?);
            println!("A ^ 4:");
            print!("{}", engine.power(&a, 4)?);
        }
        "multiply" => {
            let order: usize = args.get(2).unwrap_or(&"4".to_string()).parse()?;
            let seed: u32 = args.get(3).unwrap_or(&"1".to_string()).parse()?;

            let a = Matrix::random(order, seed)?;
            let b = Matrix::random(order, seed.wrapping_add(1))?;
            let c = engine.multiply(&a, &b)?;

            println!("Result ({}x{}):", order, order);
            print!("{c}");
        }
        "power" => {
            let order: usize = args.get(2).unwrap_or(&"4".to_string()).parse()?;
            let exponent: u32 = args.get(3).unwrap_or(&"2".to_string()).parse()?;

            let a = engine.sequence(order, 1, 1)?;
            let p = engine.power(&a, exponent)?;

            println!("Sequence matrix ^ {}:", exponent);
            print!("{p}");
        }
        "stats" => {
            let order: usize = args.get(2).unwrap_or(&"4".to_string()).parse()?;
            let seed: u32 = args.get(3).unwrap_or(&"1".to_string()).parse()?;

            let a = Matrix::random(order, seed)?;
            println!("sum:     {}", engine.sum(&a)?);
            println!("trace:   {}", engine.trace(&a)?);
            println!("minimum: {}", engine.min(&a)?);
            println!("maximum: {}", engine.max(&a)?);
            println!("zeros:   {}", engine.frequency(&a, 0)?);
        }
        _ => {
            eprintln!("Unknown mode: {}", mode);
            eprintln!("Usage: {} <mode> [args...]", args[0]);
            eprintln!("Modes:");
            eprintln!("  demo                   - Run the 2x2 examples (default)");
            eprintln!("  multiply <order> <seed> - Multiply two seeded random matrices");
            eprintln!("  power <order> <exp>     - Raise a sequence matrix to a power");
            eprintln!("  stats <order> <seed>    - Reductions over a seeded random matrix");
            eprintln!("Worker count is read from PAR_MATRIX_THREADS.");
            std::process::exit(1);
        }
    }

    Ok(())
}
