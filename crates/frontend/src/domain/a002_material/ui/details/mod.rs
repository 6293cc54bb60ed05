mod model;
mod view;
mod view_model;

pub use view::MaterialDetails;
pub use view_model::MaterialDetailsViewModel;
