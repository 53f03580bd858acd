//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use bigmul_core::TestType;

/// BigMul: Karatsuba, Toom-Cook-3 and Schönhage-Strassen multiplication.
#[derive(Parser, Debug)]
#[command(name = "bigmul", version, about)]
pub struct AppConfig {
    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output values).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Multiply two signed decimal integers.
    Multiply {
        /// First operand.
        #[arg(allow_negative_numbers = true)]
        x: String,

        /// Second operand.
        #[arg(allow_negative_numbers = true)]
        y: String,

        /// Algorithm to use: karatsuba, toom, ssa, or all.
        #[arg(long, default_value = "all", env = "BIGMUL_ALGO")]
        algo: String,
    },

    /// Generate a key pair.
    Keygen {
        /// Algorithm to use: karatsuba, toom, or ssa.
        #[arg(long, default_value = "karatsuba", env = "BIGMUL_ALGO")]
        algo: String,
    },

    /// Encode text with a key.
    Encode {
        /// Text to encode.
        text: String,

        /// Decimal key.
        #[arg(short, long, allow_negative_numbers = true)]
        key: String,

        /// Algorithm to use: karatsuba, toom, or ssa.
        #[arg(long, default_value = "karatsuba", env = "BIGMUL_ALGO")]
        algo: String,
    },

    /// Decode `:`-separated hex chunks with a key.
    Decode {
        /// Encoded text.
        text: String,

        /// Decimal key.
        #[arg(short, long, allow_negative_numbers = true)]
        key: String,

        /// Algorithm to use: karatsuba, toom, or ssa.
        #[arg(long, default_value = "karatsuba", env = "BIGMUL_ALGO")]
        algo: String,
    },

    /// Benchmark encode and decode on a payload.
    Bench {
        /// Size in bytes of the random payload.
        #[arg(short, long, default_value_t = 1024, env = "BIGMUL_BENCH_SIZE")]
        size: usize,

        /// Benchmark this text instead of a random payload; takes precedence over `--size`.
        #[arg(short, long)]
        data: Option<String>,

        /// Phases to time.
        #[arg(long, value_enum, default_value_t = BenchMode::Both)]
        mode: BenchMode,

        /// Algorithm to use: karatsuba, toom, ssa, or all.
        #[arg(long, default_value = "all", env = "BIGMUL_ALGO")]
        algo: String,

        /// Print the results as JSON.
        #[arg(long)]
        json: bool,

        /// Write the JSON results to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Benchmark phases selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    /// Time encoding only.
    Encode,
    /// Time decoding only.
    Decode,
    /// Time both phases.
    Both,
}

impl From<BenchMode> for TestType {
    fn from(mode: BenchMode) -> Self {
        match mode {
            BenchMode::Encode => Self::Encode,
            BenchMode::Decode => Self::Decode,
            BenchMode::Both => Self::Both,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bigmul").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn multiply_accepts_negative_operands() {
        let config = parse(&["multiply", "-1234", "5678", "--algo", "toom"]);
        match config.command {
            Command::Multiply { x, y, algo } => {
                assert_eq!(x, "-1234");
                assert_eq!(y, "5678");
                assert_eq!(algo, "toom");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["keygen", "-q"]);
        assert!(config.quiet);
        assert!(!config.verbose);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = AppConfig::try_parse_from(["bigmul", "-v", "-q", "keygen"]);
        assert!(result.is_err());
    }

    #[test]
    fn bench_accepts_data_and_size_together() {
        let config = parse(&["bench", "--size", "10", "--data", "abc"]);
        match config.command {
            Command::Bench { size, data, .. } => {
                assert_eq!(size, 10);
                assert_eq!(data.as_deref(), Some("abc"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bench_data_with_size_from_env() {
        std::env::set_var("BIGMUL_BENCH_SIZE", "64");
        let result = AppConfig::try_parse_from(["bigmul", "bench", "--data", "abc"]);
        std::env::remove_var("BIGMUL_BENCH_SIZE");
        match result.unwrap().command {
            Command::Bench { size, data, .. } => {
                assert_eq!(size, 64);
                assert_eq!(data.as_deref(), Some("abc"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bench_mode_parses() {
        match parse(&["bench"]).command {
            Command::Bench { mode, .. } => assert_eq!(mode, BenchMode::Both),
            other => panic!("unexpected command {other:?}"),
        }
        match parse(&["bench", "--mode", "decode"]).command {
            Command::Bench { mode, .. } => assert_eq!(TestType::from(mode), TestType::Decode),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(AppConfig::try_parse_from(["bigmul", "bench", "--mode", "encrypt"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
