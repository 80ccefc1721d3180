use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run(count: usize, length: usize, bias: f64, seed: Option<u64>, output: Option<&str>) {
    if !(0.0..=1.0).contains(&bias) {
        eprintln!("--bias must be within [0, 1], got {bias}.");
        std::process::exit(1);
    }
    if length == 0 {
        eprintln!("--length must be positive.");
        std::process::exit(1);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let strings = generate_strings(&mut rng, count, length, bias);
    let mut lines = strings.join("\n");
    lines.push('\n');

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &lines) {
                eprintln!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
            println!("{count} string(s) of {length} bits written to: {path}");
        }
        None => print!("{lines}"),
    }
}

/// Generate `count` bit strings of `length` bits, each bit `'1'` with
/// probability `bias`.
fn generate_strings(rng: &mut StdRng, count: usize, length: usize, bias: f64) -> Vec<String> {
    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| if rng.random_bool(bias) { '1' } else { '0' })
                .collect()
        })
        .collect()
}
