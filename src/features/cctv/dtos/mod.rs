mod cctv_dto;

pub use cctv_dto::CctvListQuery;
