//! In-memory `AdminApi` that records every call, for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::AdminApi;
use crate::error::{AdminError, Result};
use crate::responses::{OfferRequest, StatusUpdate};
use crate::types::{Project, ProjectSnapshot};

#[derive(Default)]
pub struct FakeApi {
    snapshot: Mutex<ProjectSnapshot>,
    pub fail_fetch: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fetches: AtomicUsize,
    pub offers: Mutex<Vec<(i64, OfferRequest)>>,
    pub status_updates: Mutex<Vec<(i64, StatusUpdate)>>,
}

impl FakeApi {
    pub fn with_snapshot(snapshot: ProjectSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            ..Default::default()
        }
    }

    pub fn set_snapshot(&self, snapshot: ProjectSnapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    pub fn offer_count(&self) -> usize {
        self.offers.lock().unwrap().len()
    }

    /// Every network call made so far.
    pub fn total_calls(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
            + self.offer_count()
            + self.status_updates.lock().unwrap().len()
    }

    fn unavailable() -> AdminError {
        AdminError::ApiError {
            status: 503,
            message: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn fetch_projects(&self) -> Result<ProjectSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn fetch_project(&self, id: i64) -> Result<Project> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let found = self.snapshot.lock().unwrap().find(id).cloned();
        found.ok_or(AdminError::ProjectNotFound(id))
    }

    async fn send_offer(&self, id: i64, offer: &OfferRequest) -> Result<()> {
        self.offers.lock().unwrap().push((id, offer.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }

    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<()> {
        self.status_updates.lock().unwrap().push((id, update.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }
}

pub fn project(id: i64, subject: &str, status: &str) -> Project {
    Project {
        id,
        subject_name: subject.to_string(),
        username: Some(format!("student{id}")),
        user_full_name: None,
        details: format!("Request details for {subject}"),
        status: status.to_string(),
        deadline: "2024-05-10".to_string(),
        tutor_name: None,
        user_id: Some(1000 + id),
        price: None,
        delivery_date: None,
    }
}

pub fn sample_snapshot() -> ProjectSnapshot {
    ProjectSnapshot {
        pending: vec![project(7, "Networks", "pending"), project(3, "Compilers", "pending")],
        offered: vec![project(5, "Statistics", "offered")],
        ongoing: vec![project(9, "Operating Systems", "ongoing")],
        history: vec![project(1, "Algebra", "finished")],
    }
}
