mod report_dto;

pub use report_dto::{
    get_extension_from_content_type, is_photo_mime_type_allowed, CreateReportDto,
    CreateReportForm, DeleteReportResponseDto, PhotoUpload, ReportListQuery, ReportResponseDto,
    ALLOWED_PHOTO_MIME_TYPES, MAX_PHOTO_SIZE,
};
