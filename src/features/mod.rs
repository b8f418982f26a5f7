pub mod admins;
pub mod auth;
pub mod cctv;
pub mod reports;
