use serde::{Deserialize, Serialize};

/// Status tag the backend assigns to requests awaiting an offer.
pub const STATUS_PENDING: &str = "pending";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub subject_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

impl Project {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    /// Name to show for the requesting student: `username`, then `user_full_name`.
    pub fn display_user(&self) -> &str {
        [self.username.as_deref(), self.user_full_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or("Unknown")
    }

    /// Price and delivery of the last offer, if one was made.
    pub fn last_offer(&self) -> Option<(&str, &str)> {
        match (self.price.as_deref(), self.delivery_date.as_deref()) {
            (Some(price), Some(date)) if !price.is_empty() => Some((price, date)),
            _ => None,
        }
    }
}
