use crate::client::AdminApi;
use crate::error::Result;
use crate::output;
use crate::responses::StatusUpdate;

pub async fn set(api: &dyn AdminApi, id: i64, status: String) -> Result<()> {
    let update = StatusUpdate { status };
    api.update_status(id, &update).await?;

    output::print_message(&format!(
        "Project #{id} status set to '{}'",
        update.status
    ));

    Ok(())
}
