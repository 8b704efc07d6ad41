use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::client::AdminApi;
use crate::draft::{OfferDraft, SubmitOutcome};
use crate::error::Result;
use crate::output;
use crate::sync::{RefreshTimer, SyncController};

const HELP: &str = "Commands:
  r, refresh         Fetch the latest projects now
  b, board           Show the board again
  o, open <id>       Open a project (a bare id works too)
  price <text>       Set the offer price
  date <text>        Set the delivery date
  send               Send the offer
  c, cancel          Close the open project
  ?, help            Show this help
  q, quit            Leave the dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Board,
    Open(i64),
    Price(String),
    Date(String),
    Send,
    Cancel,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "r" | "refresh" => Command::Refresh,
            "b" | "board" => Command::Board,
            "o" | "open" => match parse_id(rest) {
                Some(id) => Command::Open(id),
                None => Command::Unknown(line.to_string()),
            },
            "price" => Command::Price(rest.to_string()),
            "date" => Command::Date(rest.to_string()),
            "send" => Command::Send,
            "c" | "cancel" | "close" => Command::Cancel,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => match parse_id(line) {
                Some(id) => Command::Open(id),
                None => Command::Unknown(line.to_string()),
            },
        }
    }
}

fn parse_id(s: &str) -> Option<i64> {
    s.trim().trim_start_matches('#').parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State of one dashboard session: the synced board plus the open offer form.
pub struct Dashboard<'a> {
    api: &'a dyn AdminApi,
    sync: SyncController,
    draft: OfferDraft,
}

impl<'a> Dashboard<'a> {
    pub fn new(api: &'a dyn AdminApi) -> Self {
        Self {
            api,
            sync: SyncController::new(),
            draft: OfferDraft::new(),
        }
    }

    pub fn draft(&self) -> &OfferDraft {
        &self.draft
    }

    pub async fn refresh(&mut self) -> bool {
        self.sync.refresh(self.api).await
    }

    /// Refresh with the loading line shown while the request is in flight.
    async fn reload(&mut self) -> bool {
        self.sync.begin();
        println!("{}", self.status_line().bright_black());
        self.refresh().await
    }

    /// "Loading..." while a refresh is pending, else when the board last synced.
    pub fn status_line(&self) -> String {
        if self.sync.is_loading() {
            return "Loading...".to_string();
        }
        match self.sync.last_synced() {
            Some(t) => format!("last synced {}", t.format("%H:%M:%S")),
            None => "not synced yet".to_string(),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Refresh => {
                self.reload().await;
                self.render_board();
            }
            Command::Board => self.render_board(),
            Command::Open(id) => match self.sync.snapshot().find(id) {
                Some(project) => {
                    self.draft.select_project(project.clone());
                    self.render_detail();
                }
                None => output::print_error(&format!("No project #{id} on the board")),
            },
            Command::Price(price) => {
                if self.require_form() {
                    self.draft.set_price(price);
                }
            }
            Command::Date(date) => {
                if self.require_form() {
                    self.draft.set_delivery_date(date);
                }
            }
            Command::Send => {
                if self.require_form() {
                    self.send_offer().await;
                }
            }
            Command::Cancel => {
                self.draft.cancel();
                self.render_board();
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Flow::Quit,
            Command::Empty => {}
            Command::Unknown(input) => {
                println!("Unknown command '{input}'. Type 'help' for a list.");
            }
        }
        Flow::Continue
    }

    /// One pass of the loop: an operator command, or a timer tick when `None`.
    async fn step(&mut self, command: Option<Command>) -> Flow {
        match command {
            Some(command) => self.handle(command).await,
            None => {
                println!();
                self.on_tick().await;
                Flow::Continue
            }
        }
    }

    /// Timer tick: refresh, but only redraw the board when no project is open.
    pub async fn on_tick(&mut self) {
        let replaced = self.refresh().await;
        if self.draft.selected().is_none() && replaced {
            self.render_board();
        } else {
            debug!(replaced, "Background refresh");
        }
    }

    fn require_form(&self) -> bool {
        match self.draft.selected() {
            None => {
                println!("Open a project first (e.g. 'open 7').");
                false
            }
            Some(project) if !self.draft.can_offer() => {
                println!(
                    "Project #{} is '{}'; offers can only be sent for pending projects.",
                    project.id, project.status
                );
                false
            }
            Some(_) => true,
        }
    }

    async fn send_offer(&mut self) {
        match self.draft.submit_offer(self.api).await {
            SubmitOutcome::Skipped => {
                println!("Both 'price' and 'date' must be set before sending.");
            }
            SubmitOutcome::Sent(id) => {
                output::print_message(&format!("Offer sent for project #{id}!"));
                self.reload().await;
                self.render_board();
            }
            SubmitOutcome::Failed(e) => {
                output::print_error(&format!("Failed to send offer: {e}"));
                self.render_detail();
            }
        }
    }

    pub fn render_board(&self) {
        println!(
            "{}  {}",
            "SVU Admin Dashboard".bold(),
            self.status_line().bright_black()
        );
        output::print_board(self.sync.snapshot());
    }

    fn render_detail(&self) {
        if let Some(view) = self.detail_view() {
            println!("{view}");
        }
    }

    /// Text of the detail view, with the offer form only for pending projects.
    pub fn detail_view(&self) -> Option<String> {
        let project = self.draft.selected()?;
        let mut out = output::render_project(project);

        if self.draft.can_offer() {
            out.push_str(&format!("\n  {}\n", "Make an Offer".bold()));
            out.push_str(&format!(
                "  Price (e.g. 50,000 SYP): {}\n",
                self.draft.price()
            ));
            out.push_str(&format!(
                "  Date (e.g. 2024-05-01):  {}\n",
                self.draft.delivery_date()
            ));
            out.push_str("  Use 'price <text>', 'date <text>', then 'send'. 'cancel' closes.\n");
        } else {
            out.push_str("\n  'cancel' closes.\n");
        }
        Some(out)
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Drive `work` to completion unless `interrupt` fires first.
async fn interruptible<F, I>(work: F, interrupt: &mut I) -> Option<F::Output>
where
    F: Future,
    I: Future + Unpin,
{
    tokio::select! {
        out = work => Some(out),
        _ = interrupt => None,
    }
}

/// Run the interactive dashboard until the operator quits, stdin closes or Ctrl-C.
///
/// Ctrl-C also abandons a refresh or offer that is still waiting on the backend.
pub async fn run(api: &dyn AdminApi, period: Duration) -> Result<()> {
    let mut dashboard = Dashboard::new(api);
    let mut timer = RefreshTimer::start(period);
    info!(period_secs = timer.period().as_secs(), "Dashboard started");

    // One listener for the whole session so a signal between polls is not lost.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    if interruptible(dashboard.reload(), &mut ctrl_c).await.is_none() {
        println!();
        info!("Dashboard closed");
        return Ok(());
    }
    dashboard.render_board();
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let command = tokio::select! {
            _ = timer.tick() => None,
            line = lines.next_line() => match line? {
                Some(line) => Some(Command::parse(&line)),
                None => break,
            },
            _ = &mut ctrl_c => {
                println!();
                break;
            }
        };

        match interruptible(dashboard.step(command), &mut ctrl_c).await {
            Some(Flow::Continue) => {}
            Some(Flow::Quit) => break,
            None => {
                println!();
                break;
            }
        }
    }

    info!("Dashboard closed");
    Ok(())
}
