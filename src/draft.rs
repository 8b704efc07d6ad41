//! In-progress offer for the project open in the detail view.

use tracing::{info, warn};

use crate::client::AdminApi;
use crate::error::AdminError;
use crate::responses::OfferRequest;
use crate::types::Project;

/// Result of [`OfferDraft::submit_offer`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Preconditions not met; nothing was sent.
    Skipped,
    /// The backend accepted the offer for this project id. The draft is cleared.
    Sent(i64),
    /// The write failed. The draft is left untouched for a retry.
    Failed(AdminError),
}

#[derive(Debug, Default)]
pub struct OfferDraft {
    selected: Option<Project>,
    price: String,
    delivery_date: String,
}

impl OfferDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `project` in the detail view with empty offer fields.
    pub fn select_project(&mut self, project: Project) {
        self.selected = Some(project);
        self.price.clear();
        self.delivery_date.clear();
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn delivery_date(&self) -> &str {
        &self.delivery_date
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_delivery_date(&mut self, date: impl Into<String>) {
        self.delivery_date = date.into();
    }

    /// Whether the offer form applies: only pending projects take offers.
    pub fn can_offer(&self) -> bool {
        self.selected.as_ref().is_some_and(Project::is_pending)
    }

    /// Both fields are present. Values are free text and are not trimmed.
    pub fn is_ready(&self) -> bool {
        self.can_offer() && !self.price.is_empty() && !self.delivery_date.is_empty()
    }

    /// Send the offer for the selected project.
    pub async fn submit_offer(&mut self, api: &dyn AdminApi) -> SubmitOutcome {
        let id = match self.selected.as_ref() {
            Some(project) if self.is_ready() => project.id,
            _ => return SubmitOutcome::Skipped,
        };

        let offer = OfferRequest {
            price: self.price.clone(),
            delivery_date: self.delivery_date.clone(),
        };

        match api.send_offer(id, &offer).await {
            Ok(()) => {
                info!(id, price = %offer.price, delivery = %offer.delivery_date, "Offer sent");
                self.cancel();
                SubmitOutcome::Sent(id)
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to send offer");
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Close the detail view and drop whatever was typed.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.price.clear();
        self.delivery_date.clear();
    }
}
