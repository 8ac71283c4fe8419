use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycube", version)]
#[command(about = "Fly a camera around a colored cube", long_about = None)]
pub struct Cli {
    /// JSON config file; defaults are used when absent
    #[arg(env = "FLYCUBE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_config_path() {
        let cli = Cli::try_parse_from(["flycube", "data/flycube.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("data/flycube.json")));
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["flycube", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["flycube", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let err = Cli::try_parse_from(["flycube", "--fullscreen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_extra_positional_is_error() {
        assert!(Cli::try_parse_from(["flycube", "a.json", "b.json"]).is_err());
    }
}
