use crate::export::ExportFormat;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

fn cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{s}' (use YYYY-MM-DD or D.M.YYYY)"))
}

/// Command-line interface definition for rdates
/// Keep track of birthdays, anniversaries and upcoming events in SQLite
#[derive(Parser, Debug)]
#[command(
    name = "rdates",
    version = env!("CARGO_PKG_VERSION"),
    about = "Birthdays, anniversaries and events sorted by the days left, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date
    #[arg(global = true, long = "today", hide = true, value_parser = cli_date)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "theme", value_name = "THEME", help = "Set the color theme")]
        theme: Option<String>,

        #[arg(
            long = "import-json",
            value_name = "FILE",
            help = "Import categories, icons and theme from a settings.json file"
        )]
        import_json: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add an event
    Add {
        /// Date of the event (YYYY-MM-DD or D.M.YYYY)
        #[arg(value_parser = cli_date)]
        date: NaiveDate,

        #[arg(long, short = 't', help = "Short title shown in the list")]
        title: String,

        #[arg(long, short = 'd', default_value = "", help = "Free-text description")]
        description: String,

        #[arg(long, short = 'i', help = "Icon name from the configured catalog")]
        icon: Option<String>,

        #[arg(
            long,
            short = 'g',
            help = "Category (default: first configured category that is not a filter)"
        )]
        group: Option<String>,
    },

    /// Change an existing event, keeping its id
    Edit {
        /// Event id (full id or unique prefix)
        id: String,

        #[arg(long, value_parser = cli_date, help = "New date (YYYY-MM-DD or D.M.YYYY)")]
        date: Option<NaiveDate>,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long, short = 'i', conflicts_with = "no_icon")]
        icon: Option<String>,

        #[arg(long = "no-icon", help = "Remove the icon")]
        no_icon: bool,

        #[arg(long, short = 'g')]
        group: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Event id (full id or unique prefix)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List events sorted by days remaining
    List {
        #[arg(
            long,
            short = 'c',
            help = "Category or filter (_all, _week, _events, or a category name)"
        )]
        category: Option<String>,
    },

    /// Show every detail of one event
    Show {
        /// Event id (full id or unique prefix)
        id: String,
    },

    /// Print configured categories and icons
    Categories,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'c', help = "Category or filter to export")]
        category: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_both_date_forms() {
        let cli = Cli::parse_from(["rdates", "add", "20.6.1990", "--title", "Mum", "-g", "_birthdays"]);
        match cli.command {
            Commands::Add { date, title, group, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(1990, 6, 20).unwrap());
                assert_eq!(title, "Mum");
                assert_eq!(group.as_deref(), Some("_birthdays"));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from(["rdates", "--today", "2024-06-15", "list"]);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn rejects_impossible_dates() {
        let res = Cli::try_parse_from(["rdates", "add", "2023-02-29", "--title", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn icon_and_no_icon_conflict() {
        let res = Cli::try_parse_from(["rdates", "edit", "abcd", "--icon", "a.png", "--no-icon"]);
        assert!(res.is_err());
    }
}
