//! CLI command definitions.

pub mod google;
pub mod slack;
pub mod telegram;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Notifications and simple operations against SaaS APIs.
#[derive(Debug, Parser)]
#[command(name = "herald")]
#[command(version, about = "Send notifications to Slack, Telegram and Google Calendar", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

/// Logging flags shared by every command.
#[derive(Debug, Clone, Args)]
pub struct Global {
    /// Log level or filter directive (info, warn, error, debug, trace).
    #[arg(long, env = "STDOUT_LEVEL", default_value = "info", global = true)]
    pub stdout_level: String,

    /// Log format.
    #[arg(
        long,
        env = "STDOUT_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text,
        global = true
    )]
    pub stdout_format: LogFormat,

    /// Colored text logs.
    #[arg(
        long,
        env = "STDOUT_TEXT_COLORS",
        default_value_t = true,
        action = ArgAction::Set,
        global = true
    )]
    pub stdout_text_colors: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Slack tools.
    Slack(slack::SlackCommand),
    /// Telegram tools.
    Telegram(telegram::TelegramCommand),
    /// Google tools.
    Google(google::GoogleCommand),
    /// Print the version number.
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["herald", "version"]).unwrap();
        assert_eq!(cli.global.stdout_level, "info");
        assert_eq!(cli.global.stdout_format, LogFormat::Text);
        assert!(cli.global.stdout_text_colors);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "herald",
            "version",
            "--stdout-level",
            "debug",
            "--stdout-format",
            "json",
            "--stdout-text-colors",
            "false",
        ])
        .unwrap();
        assert_eq!(cli.global.stdout_level, "debug");
        assert_eq!(cli.global.stdout_format, LogFormat::Json);
        assert!(!cli.global.stdout_text_colors);
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["herald", "discord"]).is_err());
    }
}
