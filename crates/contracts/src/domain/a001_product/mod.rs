pub mod aggregate;

pub use aggregate::{
    normalize_price_input, Product, ProductDetails, ProductForm, ProductMaterial, ProductPayload,
};
