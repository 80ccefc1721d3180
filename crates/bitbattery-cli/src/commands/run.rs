use bitbattery_core::{BatteryConfig, RecordTable, run_standard_battery};

pub struct RunCommandConfig<'a> {
    pub input: &'a str,
    pub freq_std_block: usize,
    pub pattern_blocks: &'a str,
    pub alternation_block: usize,
    pub monotonicity_block: usize,
    pub output_path: Option<&'a str>,
    pub format: &'a str,
}

pub fn run(cfg: RunCommandConfig) {
    let pattern_blocks = match parse_block_list(cfg.pattern_blocks) {
        Ok(blocks) if !blocks.is_empty() => blocks,
        Ok(_) => {
            eprintln!("--pattern-blocks needs at least one block size.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Validate user-supplied block sizes up front so bad flags surface as
    // CLI errors, not as library precondition panics.
    if cfg.freq_std_block == 0
        || cfg.monotonicity_block == 0
        || pattern_blocks.contains(&0)
    {
        eprintln!("Block sizes must be positive.");
        std::process::exit(1);
    }
    if cfg.alternation_block == 0 || cfg.alternation_block % 2 != 0 {
        eprintln!(
            "--alternation-block must be positive and even, got {}.",
            cfg.alternation_block
        );
        std::process::exit(1);
    }

    let mut table = match super::load_table(cfg.input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", cfg.input);
            std::process::exit(1);
        }
    };
    if table.is_empty() {
        eprintln!("No bit strings in {}.", cfg.input);
        std::process::exit(1);
    }
    log::debug!("loaded {} string(s) from {}", table.len(), cfg.input);

    println!("Running test battery over {} string(s)...", table.len());

    let config = BatteryConfig {
        frequency_std_block: cfg.freq_std_block,
        pattern_blocks,
        alternation_block: cfg.alternation_block,
        monotonicity_block: cfg.monotonicity_block,
    };
    run_standard_battery(&mut table, &config);

    print_summary(&table);

    if let Some(path) = cfg.output_path {
        let rendered = match cfg.format {
            "csv" => render_csv(&table),
            _ => match serde_json::to_string_pretty(&table) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Failed to encode table: {e}");
                    std::process::exit(1);
                }
            },
        };
        if let Err(e) = std::fs::write(path, rendered) {
            eprintln!("Failed to write {path}: {e}");
            std::process::exit(1);
        }
        println!("\nTable saved to: {path}");
    }
}

/// Per-metric min/mean/max across rows. NaN rows (degenerate strings) are
/// excluded from the displayed summary; they stay intact in `--output`.
fn print_summary(table: &RecordTable) {
    println!();
    println!(
        "{:<16} {:>10} {:>10} {:>10}",
        "Metric", "Min", "Mean", "Max"
    );
    println!("{}", "-".repeat(50));
    for column in table.columns() {
        let (min, mean, max) = summarize(&column.values);
        println!(
            "{:<16} {:>10.4} {:>10.4} {:>10.4}",
            column.name, min, mean, max
        );
    }
}

fn summarize(values: &[f64]) -> (f64, f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut n = 0usize;
    for &value in values {
        if value.is_nan() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
        sum += value;
        n += 1;
    }
    if n == 0 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    (min, sum / n as f64, max)
}

fn parse_block_list(spec: &str) -> Result<Vec<usize>, String> {
    spec.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("Invalid block size `{part}` in --pattern-blocks."))
        })
        .collect()
}

/// Render the table as CSV: the string column first, then one column per
/// metric in append order. Matches the row order of the input exactly.
fn render_csv(table: &RecordTable) -> String {
    let mut out = String::from("String");
    for column in table.columns() {
        out.push(',');
        out.push_str(&column.name);
    }
    out.push('\n');
    for (row, string) in table.strings().iter().enumerate() {
        out.push_str(string);
        for column in table.columns() {
            out.push(',');
            out.push_str(&column.values[row].to_string());
        }
        out.push('\n');
    }
    out
}
