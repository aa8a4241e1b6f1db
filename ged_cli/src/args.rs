use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ged_search::SearchConfig;

/// ged - Edit distance between two labelled graphs
#[derive(Parser, Debug)]
#[command(name = "ged")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph document describing the old version
    pub source: PathBuf,

    /// Graph document describing the new version
    pub target: PathBuf,

    /// Stop after this many milliseconds and report the best mapping so far
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Log search progress every N popped nodes (visible at debug level)
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Only map vertices of the same kind onto each other (placeholders map anywhere)
    #[arg(long, default_value_t = false)]
    pub same_kind_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// Convert command-line arguments into the search configuration
    pub fn to_config(&self) -> SearchConfig {
        let mut builder = SearchConfig::builder();
        if let Some(ms) = self.time_limit_ms {
            builder = builder.time_limit(Duration::from_millis(ms));
        }
        if let Some(every) = self.progress_interval {
            builder = builder.progress_interval(every);
        }
        builder.build()
    }
}

/// Command-line argument wrapper for the report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per edit operation
    #[value(name = "text")]
    Text,
    /// Pretty printed JSON report
    #[value(name = "json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_limits_and_format() {
        let args = Args::parse_from([
            "ged",
            "old.json",
            "new.json",
            "--time-limit-ms",
            "250",
            "--progress-interval",
            "100",
            "--same-kind-only",
            "--format",
            "json",
        ]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.same_kind_only);

        let config = args.to_config();
        assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
        assert_eq!(config.progress_interval, Some(100));
    }

    #[test]
    fn defaults_are_unbounded_text() {
        let args = Args::parse_from(["ged", "a.json", "b.json"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.to_config(), SearchConfig::default());
    }
}
