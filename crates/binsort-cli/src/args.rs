use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "binsort")]
#[command(about = "Sort items into ordered category bins")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.binsort)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the built-in mixed bag of candies
    Demo {
        /// Do not print the bucket state
        #[arg(long)]
        no_buckets: bool,
    },

    /// Sort items from a TOML file ([[items]] category = "...", name = "...")
    Sort {
        /// Items file
        file: PathBuf,

        /// Do not print the bucket state
        #[arg(long)]
        no_buckets: bool,
    },

    /// List categories of the active scheme in priority order
    Categories,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., scheme.order, scheme.labels.gummy)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., scheme.order, display.show_buckets)
        key: String,

        /// Value to set (e.g., "gum,lollipop" or "[gum, lollipop]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_command() {
        let cli = Cli::try_parse_from(["binsort", "-v", "sort", "items.toml", "--no-buckets"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Sort { file, no_buckets }) => {
                assert_eq!(file, PathBuf::from("items.toml"));
                assert!(no_buckets);
            }
            _ => panic!("expected sort command"),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let cli =
            Cli::try_parse_from(["binsort", "config", "set", "scheme.order", "a,b"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Set { .. }
            })
        ));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
