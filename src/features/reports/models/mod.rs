mod confirmation;
mod report;

pub use confirmation::ReportConfirmation;
pub use report::{CreateReport, Report, ReportKind, SocialPlatform, WaterLevel};
