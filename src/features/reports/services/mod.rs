mod confirmation_service;
mod report_service;

pub use confirmation_service::ConfirmationService;
pub use report_service::ReportService;
