pub mod field_error;
pub mod pagination_controls;
pub mod resource_list;
pub mod search_input;

pub use field_error::FieldError;
pub use pagination_controls::PaginationControls;
pub use resource_list::{ResourceError, ResourcePagination, ResourceSearch, ResourceStatusRow};
pub use search_input::SearchInput;
