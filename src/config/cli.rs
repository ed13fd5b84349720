use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "chicken-classifier")]
#[command(about = "Runs the chicken disease classifier pipeline stages")]
pub struct DriverArgs {
    /// Path to the pipeline config file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: PathBuf,

    /// Path to the training params file; skipped when missing
    #[arg(short, long, default_value = "params.yaml")]
    pub params: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory after each stage
    #[arg(long)]
    pub monitor: bool,

    /// Also append log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = DriverArgs::parse_from(["chicken-classifier"]);
        assert_eq!(args.config, PathBuf::from("config/config.yaml"));
        assert_eq!(args.params, PathBuf::from("params.yaml"));
        assert_eq!(args.log_format, LogFormat::Compact);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = DriverArgs::parse_from([
            "chicken-classifier",
            "--config",
            "cfg.toml",
            "--monitor",
            "--log-file",
            "logs/running_logs.log",
            "--log-format",
            "json",
        ]);
        assert_eq!(args.config, PathBuf::from("cfg.toml"));
        assert!(args.monitor);
        assert_eq!(args.log_file, Some(PathBuf::from("logs/running_logs.log")));
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
