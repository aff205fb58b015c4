//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Markbook: student mark records backed by a CSV file
#[derive(Parser)]
#[command(name = "markbook")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the backing CSV file
    #[arg(short, long, global = true, default_value = "students.csv")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive numbered menu (default)
    Menu,

    /// Add a student with five marks
    Add {
        /// Student name
        name: String,

        /// Maths mark (0-100)
        #[arg(allow_negative_numbers = true)]
        maths: i64,

        /// Science mark (0-100)
        #[arg(allow_negative_numbers = true)]
        science: i64,

        /// English mark (0-100)
        #[arg(allow_negative_numbers = true)]
        english: i64,

        /// Social studies mark (0-100)
        #[arg(allow_negative_numbers = true)]
        social_studies: i64,

        /// Language mark (0-100)
        #[arg(allow_negative_numbers = true)]
        language: i64,
    },

    /// Change one subject mark for a student
    Update {
        /// Student name (first exact match is updated)
        name: String,

        /// Subject (maths, science, english, social_studies, language)
        subject: String,

        /// New mark (0-100)
        #[arg(allow_negative_numbers = true)]
        mark: i64,
    },

    /// Delete a student
    Delete {
        /// Student name (first exact match is deleted)
        name: String,
    },

    /// Show class analytics
    Analytics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all students with their totals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_file_and_no_subcommand() {
        let cli = Cli::try_parse_from(["markbook"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("students.csv"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_update() {
        let cli =
            Cli::try_parse_from(["markbook", "--file", "class.csv", "update", "Alice", "maths", "85"])
                .unwrap();
        assert_eq!(cli.file, PathBuf::from("class.csv"));
        match cli.command {
            Some(Commands::Update {
                name,
                subject,
                mark,
            }) => {
                assert_eq!(name, "Alice");
                assert_eq!(subject, "maths");
                assert_eq!(mark, 85);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_parse_add_accepts_negative_marks() {
        // Range checking is the store's job, not the parser's.
        let cli = Cli::try_parse_from(["markbook", "add", "Bob", "1", "2", "-3", "4", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add { english: -3, .. })
        ));
    }
}
