pub mod api_response;
pub mod page;
pub mod validation;

pub use api_response::{ApiResponse, ApplicationError};
pub use page::{ListQuery, PageQuery, PageResult};
pub use validation::{FieldErrors, ValidationRules};
