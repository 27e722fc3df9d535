//! Command-line interface definition.
//!
//! Every option is optional on the command line so that values from the
//! configuration file can fill the gaps. Precedence is
//! **CLI argument > config file > hardcoded default**.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_MAX_DEPTH, FileConfig, ScanOptions, file::expand_tilde};

#[derive(Parser)]
struct OutputArgs {
    /// Output the full analysis as JSON
    #[arg(long)]
    json: bool,

    /// Print the text report even if the config file enables JSON
    #[arg(long, conflicts_with = "json")]
    no_json: bool,
}

#[derive(Parser)]
struct ScanningArgs {
    /// Max directory depth listed in the directory tree [default: 3]
    #[arg(short = 'd', long)]
    depth: Option<usize>,

    /// Show read and parse errors that were skipped during analysis
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Extra directory names to skip while walking the project
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<String>,
}

#[derive(Parser)]
#[command(name = "stackscan", version)]
#[command(
    about = "Classify a project's frameworks, UI toolkits, routing and stack type for preset generation"
)]
pub struct Cli {
    /// Path to analyze [default: current directory]
    pub path: Option<PathBuf>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// The directory to analyze.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            config
                .dir
                .as_deref()
                .map_or_else(|| PathBuf::from("."), expand_tilde)
        })
    }

    /// Whether JSON output was requested.
    ///
    /// `--json` and `--no-json` both take precedence over the config file.
    #[must_use]
    pub fn json(&self, config: &FileConfig) -> bool {
        if self.output.no_json {
            return false;
        }
        self.output.json || config.json.unwrap_or(false)
    }

    /// Scanning options merged from the CLI and the config file.
    ///
    /// Skip lists from both sources are combined.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.scanning.skip.iter().cloned());

        ScanOptions {
            max_depth: self
                .scanning
                .depth
                .or(config.scanning.depth)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::FileScanConfig;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stackscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        let config = FileConfig::default();

        assert_eq!(cli.directory(&config), PathBuf::from("."));
        assert!(!cli.json(&config));

        let options = cli.scan_options(&config);
        assert_eq!(options.max_depth, 3);
        assert!(!options.verbose);
        assert!(options.skip.is_empty());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "/tmp/project",
            "--json",
            "--depth",
            "5",
            "-v",
            "--skip",
            "fixtures",
            "--skip",
            "e2e",
        ]);
        let config = FileConfig::default();

        assert_eq!(cli.directory(&config), Path::new("/tmp/project"));
        assert!(cli.json(&config));

        let options = cli.scan_options(&config);
        assert_eq!(options.max_depth, 5);
        assert!(options.verbose);
        assert_eq!(options.skip, vec!["fixtures", "e2e"]);
    }

    #[test]
    fn test_config_fills_missing_values() {
        let cli = parse(&[]);
        let config = FileConfig {
            dir: Some(PathBuf::from("/srv/app")),
            json: Some(true),
            scanning: FileScanConfig {
                depth: Some(2),
                verbose: Some(true),
                skip: Some(vec!["storybook-static".to_string()]),
            },
        };

        assert_eq!(cli.directory(&config), Path::new("/srv/app"));
        assert!(cli.json(&config));

        let options = cli.scan_options(&config);
        assert_eq!(options.max_depth, 2);
        assert!(options.verbose);
        assert_eq!(options.skip, vec!["storybook-static"]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["web", "--depth", "0", "--skip", "e2e"]);
        let config = FileConfig {
            dir: Some(PathBuf::from("/srv/app")),
            json: None,
            scanning: FileScanConfig {
                depth: Some(6),
                verbose: None,
                skip: Some(vec!["fixtures".to_string()]),
            },
        };

        assert_eq!(cli.directory(&config), Path::new("web"));

        let options = cli.scan_options(&config);
        assert_eq!(options.max_depth, 0);
        assert_eq!(options.skip, vec!["fixtures", "e2e"]);
    }

    #[test]
    fn test_no_json_overrides_config() {
        let config = FileConfig {
            json: Some(true),
            ..FileConfig::default()
        };

        assert!(parse(&[]).json(&config));
        assert!(!parse(&["--no-json"]).json(&config));
    }

    #[test]
    fn test_json_and_no_json_conflict() {
        let result = Cli::try_parse_from(["stackscan", "--json", "--no-json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_depth() {
        let result = Cli::try_parse_from(["stackscan", "--depth", "-1"]);
        assert!(result.is_err());
    }
}
