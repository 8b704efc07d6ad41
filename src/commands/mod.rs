pub mod dashboard;
pub mod init;
pub mod offer;
pub mod projects;
pub mod status;
