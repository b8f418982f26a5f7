mod admin_dto;

pub use admin_dto::{AddAdminDto, AdminResponseDto, AdminStatusResponseDto, RemoveAdminResponseDto};
