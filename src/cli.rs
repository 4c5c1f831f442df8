use crate::constants::{DEFAULT_ROSTER_PATH, sweep};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Historical NFL game weather scraper
///
/// Walks the weekly weather listings for every year and week in the given
/// ranges and writes one CSV row per game: teams, final score, temperature,
/// forecast, dome flag and wind. Both ranges exclude their end value.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First season to fetch
    #[arg(long, default_value_t = sweep::YEAR_START, help_heading = "Sweep")]
    pub year_start: i32,

    /// Season to stop before
    #[arg(long, default_value_t = sweep::YEAR_END, help_heading = "Sweep")]
    pub year_end: i32,

    /// First week to fetch in each season
    #[arg(long, default_value_t = sweep::WEEK_START, help_heading = "Sweep")]
    pub week_start: u32,

    /// Week to stop before in each season
    #[arg(long, default_value_t = sweep::WEEK_END, help_heading = "Sweep")]
    pub week_end: u32,

    /// CSV file with the valid team names
    #[arg(long, default_value = DEFAULT_ROSTER_PATH, help_heading = "Files")]
    pub roster: PathBuf,

    /// Output CSV file. Defaults to "NFL Weather Data.csv" next to the roster file.
    #[arg(short, long, help_heading = "Files")]
    pub output: Option<PathBuf>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Only write logs to the log file, not to the terminal
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["nfl_weather"]);

        assert_eq!(args.year_start, 2009);
        assert_eq!(args.year_end, 2019);
        assert_eq!(args.week_start, 1);
        assert_eq!(args.week_end, 18);
        assert_eq!(args.roster, PathBuf::from("data/nfl_teams.csv"));
        assert!(args.output.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_sweep_arguments() {
        let args = Args::parse_from([
            "nfl_weather",
            "--year-start",
            "2012",
            "--year-end",
            "2014",
            "--week-start",
            "3",
            "--week-end",
            "5",
            "--roster",
            "teams.csv",
            "-o",
            "out.csv",
            "--quiet",
        ]);

        assert_eq!(args.year_start, 2012);
        assert_eq!(args.year_end, 2014);
        assert_eq!(args.week_start, 3);
        assert_eq!(args.week_end, 5);
        assert_eq!(args.roster, PathBuf::from("teams.csv"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(args.quiet);
    }

    #[test]
    fn test_rejects_negative_week() {
        assert!(Args::try_parse_from(["nfl_weather", "--week-start", "-1"]).is_err());
    }
}
