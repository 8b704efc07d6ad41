use crate::cli::OfferArgs;
use crate::client::AdminApi;
use crate::draft::{OfferDraft, SubmitOutcome};
use crate::error::{AdminError, Result};
use crate::output;

/// Send an offer from the command line through the same draft the dashboard uses.
pub async fn send(api: &dyn AdminApi, args: OfferArgs) -> Result<()> {
    let project = api.fetch_project(args.id).await?;
    if !project.is_pending() {
        return Err(AdminError::NotPending {
            id: project.id,
            status: project.status,
        });
    }

    let mut draft = OfferDraft::new();
    draft.select_project(project);
    draft.set_price(args.price);
    draft.set_delivery_date(args.delivery);

    match draft.submit_offer(api).await {
        SubmitOutcome::Sent(id) => {
            output::print_message(&format!("Offer sent for project #{id}"));
            Ok(())
        }
        SubmitOutcome::Skipped => Err(AdminError::MissingOfferFields),
        SubmitOutcome::Failed(e) => Err(e),
    }
}
