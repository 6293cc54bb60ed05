pub mod a001_product;
pub mod a002_material;
pub mod common;
