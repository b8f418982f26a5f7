pub mod dtos;
pub mod events;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod routes;
pub mod services;
pub mod validation;

pub use events::ReportEventHub;
pub use handlers::ReportState;
pub use services::{ConfirmationService, ReportService};
