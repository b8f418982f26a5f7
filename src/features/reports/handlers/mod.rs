pub mod report_handler;
pub mod stream_handler;

pub use report_handler::{
    confirm_report, create_report, delete_report, get_report, list_reports, ReportState,
};
pub use stream_handler::stream_reports;
