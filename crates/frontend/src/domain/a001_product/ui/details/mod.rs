//! Product Details UI Module
//!
//! - model.rs: API functions (fetch, save, material options)
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
