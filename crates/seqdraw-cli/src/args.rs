//! Command-line argument definitions for the seqdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, theme overrides and logging verbosity.

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use seqdraw::config::ThemeKind;

/// Command-line arguments for the seqdraw diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON diagram
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Theme to draw with (plain, hand); overrides the configuration
    #[arg(short, long)]
    pub theme: Option<ThemeKind>,

    /// Seed for the hand-drawn jitter; overrides the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The requested log level, or `None` if `--log-level` is not a level name.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["seqdraw", "in.json"]).unwrap();
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_filter(), Some(LevelFilter::Info));
        assert!(args.theme.is_none());
    }

    #[test]
    fn test_log_filter() {
        let args = Args::try_parse_from(["seqdraw", "in.json", "--log-level", "TRACE"]).unwrap();
        assert_eq!(args.log_filter(), Some(LevelFilter::Trace));

        let args = Args::try_parse_from(["seqdraw", "in.json", "--log-level", "loud"]).unwrap();
        assert_eq!(args.log_filter(), None);
    }

    #[test]
    fn test_theme_and_seed_overrides() {
        let args =
            Args::try_parse_from(["seqdraw", "in.json", "-t", "hand", "--seed", "9"]).unwrap();
        assert_eq!(args.theme, Some(ThemeKind::Hand));
        assert_eq!(args.seed, Some(9));
    }
}
