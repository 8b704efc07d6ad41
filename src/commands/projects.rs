use crate::client::AdminApi;
use crate::error::Result;
use crate::output;
use crate::types::StatusGroup;

pub async fn list(api: &dyn AdminApi, group: Option<StatusGroup>) -> Result<()> {
    let snapshot = api.fetch_projects().await?;

    match group {
        Some(group) => output::print_lane(&snapshot, group),
        None => output::print_board(&snapshot),
    }

    Ok(())
}

pub async fn view(api: &dyn AdminApi, id: i64) -> Result<()> {
    let project = api.fetch_project(id).await?;

    output::print_item(&project, |p| print!("{}", output::render_project(p)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::error::AdminError;
    use crate::fake_api::{sample_snapshot, FakeApi};

    #[tokio::test]
    async fn test_list_propagates_fetch_failure() {
        let api = FakeApi::default();
        api.fail_fetch.store(true, Ordering::SeqCst);
        assert!(matches!(
            list(&api, None).await,
            Err(AdminError::ApiError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_view_missing_project() {
        let api = FakeApi::with_snapshot(sample_snapshot());
        assert!(view(&api, 7).await.is_ok());
        assert!(matches!(
            view(&api, 42).await,
            Err(AdminError::ProjectNotFound(42))
        ));
    }
}
