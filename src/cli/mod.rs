pub mod assignments;
pub mod hub;
pub mod init;
pub mod mark;
pub mod status;
pub mod tasks;
pub mod upcoming;

use clap::{Parser, Subcommand};

/// Resolve the subject id for a view: explicit --id wins, then the legacy
/// --creator-id spelling, then the configured default. None means
/// "everyone".
pub(crate) fn resolve_subject(
    id: Option<String>,
    legacy: Option<String>,
    configured: &str,
) -> Option<String> {
    id.or(legacy).or_else(|| {
        if configured.trim().is_empty() {
            None
        } else {
            Some(configured.to_string())
        }
    })
}

#[derive(Parser)]
#[command(
    name = "opshub",
    about = "Daily checklist dashboard for creator filming and VA posting tasks.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up opshub: sheet URLs, time zone, and default identities.
    Init {
        /// Default creator id for assignment views
        #[arg(long = "creator-id")]
        creator_id: Option<String>,
        /// Default VA id for task views
        #[arg(long = "va-id")]
        va_id: Option<String>,
        /// IANA time zone for "today" (default: America/Los_Angeles)
        #[arg(long)]
        timezone: Option<String>,
        /// Published CSV URL of the assignments tab
        #[arg(long = "assignments-url")]
        assignments_url: Option<String>,
        /// Published CSV URL of the VA tasks tab
        #[arg(long = "va-tasks-url")]
        va_tasks_url: Option<String>,
        /// Published CSV URL of the hub resources tab
        #[arg(long = "hub-url")]
        hub_url: Option<String>,
    },
    /// Today's filming assignments, grouped by account.
    Assignments {
        /// Creator id to filter by (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
        /// Legacy spelling of --id
        #[arg(long = "creator-id")]
        creator_id: Option<String>,
        /// Show yesterday's board instead of today's
        #[arg(long, conflicts_with = "date")]
        yesterday: bool,
        /// Target date YYYY-MM-DD (default: today in the configured zone)
        #[arg(long)]
        date: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Today's posting tasks with video numbers and posted checkboxes.
    Tasks {
        /// VA id to filter by (default: configured va_id)
        #[arg(long)]
        id: Option<String>,
        /// Only show this account's tasks
        #[arg(long)]
        account: Option<String>,
        /// Only show tasks from this creator
        #[arg(long)]
        creator: Option<String>,
        /// Target date YYYY-MM-DD (default: today in the configured zone)
        #[arg(long)]
        date: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Announcements, resources and bonus opportunities.
    Hub {
        /// Subject id for read markers (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Assignment counts for the next three days.
    Upcoming {
        /// Creator id to filter by (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
        /// Base date YYYY-MM-DD (default: today in the configured zone)
        #[arg(long)]
        date: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Mark a card on today's assignment board as filmed.
    Film {
        /// Card number as shown on the board
        position: usize,
        /// Clear the mark instead of setting it
        #[arg(long)]
        undo: bool,
        /// Creator id (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Mark a video on today's task board as posted.
    Post {
        /// Video number as shown on the board
        position: usize,
        /// Clear the mark instead of setting it
        #[arg(long)]
        undo: bool,
        /// VA id (default: configured va_id)
        #[arg(long)]
        id: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Record that all of today's uploads are done.
    Complete {
        /// Creator id confirming (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
    },
    /// Mark the Nth newest hub update as read.
    Read {
        /// Update number as shown by `opshub hub`
        position: usize,
        /// Subject id (default: configured creator_id)
        #[arg(long)]
        id: Option<String>,
        /// Read the tab from a local CSV file instead of fetching
        #[arg(long)]
        file: Option<String>,
    },
    /// Show configuration and mark-store statistics.
    Status,
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_subject_precedence() {
        assert_eq!(
            resolve_subject(Some("a".into()), Some("b".into()), "c"),
            Some("a".to_string())
        );
        assert_eq!(
            resolve_subject(None, Some("b".into()), "c"),
            Some("b".to_string())
        );
        assert_eq!(resolve_subject(None, None, "c"), Some("c".to_string()));
        assert_eq!(resolve_subject(None, None, "  "), None);
    }
}
