//! Request and response bodies exchanged with the admin API.

use serde::{Deserialize, Serialize};

/// Body of `POST /projects/{id}/offer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OfferRequest {
    pub price: String,
    pub delivery_date: String,
}

/// Body of `POST /projects/{id}/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: String,
}

/// Acknowledgement returned by write endpoints.
#[derive(Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
