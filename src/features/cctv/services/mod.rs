mod cctv_service;

pub use cctv_service::CctvService;
