//! CLI for bitbattery — randomness test battery over files of bit strings.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bitbattery")]
#[command(about = "bitbattery — randomness test battery for binary strings")]
#[command(version = bitbattery_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test battery over a file of bit strings (one per line)
    Run {
        /// Input file of newline-delimited bit strings; `-` reads stdin
        input: String,

        /// Block size for the block-wise frequency std test
        #[arg(long, default_value = "10")]
        freq_std_block: usize,

        /// Comma-separated block sizes for the fixed-pattern frequency test
        #[arg(long, default_value = "3,4")]
        pattern_blocks: String,

        /// Block size for the alternation test (must be even)
        #[arg(long, default_value = "4")]
        alternation_block: usize,

        /// Block size for the monotonicity test
        #[arg(long, default_value = "3")]
        monotonicity_block: usize,

        /// Write the full result table to a file
        #[arg(long)]
        output: Option<String>,

        /// Format for --output
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,
    },

    /// Generate pseudo-random bit strings for exercising the battery
    Generate {
        /// Number of strings to generate
        #[arg(long, default_value = "10")]
        count: usize,

        /// Bits per string
        #[arg(long, default_value = "128")]
        length: usize,

        /// Probability of a '1' bit
        #[arg(long, default_value = "0.5")]
        bias: f64,

        /// Seed for deterministic output
        #[arg(long)]
        seed: Option<u64>,

        /// Write strings to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            freq_std_block,
            pattern_blocks,
            alternation_block,
            monotonicity_block,
            output,
            format,
        } => commands::run::run(commands::run::RunCommandConfig {
            input: &input,
            freq_std_block,
            pattern_blocks: &pattern_blocks,
            alternation_block,
            monotonicity_block,
            output_path: output.as_deref(),
            format: &format,
        }),
        Commands::Generate {
            count,
            length,
            bias,
            seed,
            output,
        } => commands::generate::run(count, length, bias, seed, output.as_deref()),
    }
}
