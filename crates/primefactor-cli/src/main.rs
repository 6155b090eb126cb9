//! CLI for primefactor — factor arbitrary-precision integers from the shell.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "primefactor")]
#[command(about = "primefactor — prime factorization of integers of any size")]
#[command(version = primefactor_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Factor a single number and print its prime factors
    Factor {
        /// Decimal integer >= 1 (any number of digits)
        #[arg(allow_negative_numbers = true)]
        number: String,

        /// Print every step of the trial division before the result
        #[arg(long)]
        trace: bool,

        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Factor the same number repeatedly and report timing
    Bench {
        /// Decimal integer >= 1
        #[arg(default_value = "9223372036854775807", allow_negative_numbers = true)]
        number: String,

        /// How many times to factor the number
        #[arg(long, default_value = "2")]
        loops: usize,
    },

    /// Start the HTTP factorization server
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Per-request factorization deadline in seconds
        #[arg(long, default_value = "30")]
        timeout_sec: f64,

        /// Factorizations allowed to run at once (timed-out ones included)
        #[arg(long, default_value = "8", value_parser = clap::value_parser!(u16).range(1..))]
        max_workers: u16,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Factor {
            number,
            trace,
            json,
        } => commands::factor::run(&number, trace, json),
        Commands::Bench { number, loops } => commands::bench::run(&number, loops),
        Commands::Server {
            port,
            host,
            timeout_sec,
            max_workers,
        } => commands::server::run(&host, port, timeout_sec, usize::from(max_workers)),
    }
}
