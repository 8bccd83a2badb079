use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use daybook_core::VERSION;

/// Daybook - an encrypted, date-keyed personal journal
#[derive(Parser)]
#[command(name = "daybook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "DAYBOOK_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing journal without asking
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Entry date (YYYY-MM-DD, today, yesterday); defaults to today
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Entry text (overrides stdin/editor); blank text removes the entry
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry date (YYYY-MM-DD, today, yesterday); defaults to today
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `next` and `prev` commands
#[derive(Args)]
pub struct NavigateArgs {
    /// Date to move from (YYYY-MM-DD, today, yesterday); defaults to today
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Also print the entry text
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the `first` and `last` commands
#[derive(Args)]
pub struct EdgeArgs {
    /// Also print the entry text
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry date (YYYY-MM-DD, today, yesterday)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new encrypted journal
    Init(InitArgs),

    /// Write (or replace) the entry for a date
    Write(WriteArgs),

    /// Show the entry for a date
    Show(ShowArgs),

    /// List entry dates
    List(ListArgs),

    /// Go to the next entry after a date
    Next(NavigateArgs),

    /// Go to the previous entry before a date
    #[command(alias = "previous")]
    Prev(NavigateArgs),

    /// Go to the earliest entry
    First(EdgeArgs),

    /// Go to the latest entry
    Last(EdgeArgs),

    /// Remove the entry for a date
    Remove(RemoveArgs),

    /// Verify the passphrase and decrypt every entry
    Check(CheckArgs),

    /// Back up the journal file
    Backup(BackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["daybook", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_previous_alias() {
        let cli = Cli::try_parse_from(["daybook", "previous", "2024-01-15"]).unwrap();
        match cli.command {
            Some(Commands::Prev(args)) => assert_eq!(args.date.as_deref(), Some("2024-01-15")),
            _ => panic!("expected prev command"),
        }
    }
}
