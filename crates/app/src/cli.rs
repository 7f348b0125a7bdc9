use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "projectdeck")]
#[command(about = "A terminal UI for managing software projects")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the project catalog data file (overrides config)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "projectdeck=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["projectdeck"]);
        assert_eq!(args.config, None);
        assert_eq!(args.data_file, None);
        assert_eq!(args.log, None);
    }

    #[test]
    fn test_cli_parse_data_file_and_config() {
        let args = CliArgs::parse_from([
            "projectdeck",
            "--config",
            "/custom/config.toml",
            "--data-file",
            "/custom/projects.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.data_file, Some(PathBuf::from("/custom/projects.toml")));
    }

    #[test]
    fn test_cli_parse_log_filter() {
        let args = CliArgs::parse_from(["projectdeck", "--log", "debug"]);
        assert_eq!(args.log, Some("debug".to_string()));
    }
}
