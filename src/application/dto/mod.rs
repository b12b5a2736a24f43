pub mod categories;
pub mod pagination;
pub mod posts;
pub mod uploads;

pub use categories::CategoryDto;
pub use pagination::{DeletedDto, PaginationDto, PostPageDto};
pub use posts::{PostDto, PostWithCategoriesDto};
pub use uploads::UploadedImageDto;
