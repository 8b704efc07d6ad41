mod project;
mod snapshot;
mod status_group;

pub use project::Project;
pub use snapshot::ProjectSnapshot;
pub use status_group::StatusGroup;
