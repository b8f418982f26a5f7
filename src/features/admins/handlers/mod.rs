pub mod admin_handler;

pub use admin_handler::{add_admin, admin_status, list_admins, remove_admin};
