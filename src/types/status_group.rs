use std::fmt;

use clap::ValueEnum;
use colored::Colorize;

/// The four fixed lanes the backend partitions projects into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusGroup {
    /// New requests waiting for an offer
    Pending,
    /// Offer sent, waiting for the student
    Offered,
    /// Accepted or awaiting payment verification
    Ongoing,
    /// Finished, denied or cancelled
    History,
}

impl StatusGroup {
    /// Lane order on the board.
    pub const ALL: [StatusGroup; 4] = [
        StatusGroup::Pending,
        StatusGroup::Offered,
        StatusGroup::Ongoing,
        StatusGroup::History,
    ];

    /// Key used in the `/projects` response body.
    pub fn label(self) -> &'static str {
        match self {
            StatusGroup::Pending => "New / Pending",
            StatusGroup::Offered => "Offered / Waiting",
            StatusGroup::Ongoing => "Ongoing",
            StatusGroup::History => "History",
        }
    }

    /// Short column title.
    pub fn title(self) -> &'static str {
        match self {
            StatusGroup::Pending => "Pending",
            StatusGroup::Offered => "Offered",
            StatusGroup::Ongoing => "Ongoing",
            StatusGroup::History => "History",
        }
    }

    pub fn colored(self) -> String {
        let title = self.title();
        match self {
            StatusGroup::Pending => title.yellow().bold().to_string(),
            StatusGroup::Offered => title.blue().bold().to_string(),
            StatusGroup::Ongoing => title.green().bold().to_string(),
            StatusGroup::History => title.bright_black().bold().to_string(),
        }
    }
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
