/// Hours a report stays fresh after creation or confirmation
pub const REPORT_TTL_HOURS: i64 = 3;

/// Hours a user must wait before confirming the same report again
pub const CONFIRMATION_WINDOW_HOURS: i64 = 1;

/// The one admin account that can never be removed
pub const PRIMARY_ADMIN_EMAIL: &str = "bangundwir@gmail.com";
