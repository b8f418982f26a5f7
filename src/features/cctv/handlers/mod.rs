pub mod cctv_handler;

pub use cctv_handler::{get_camera, list_cameras, list_districts};
