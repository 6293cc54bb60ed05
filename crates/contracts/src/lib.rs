//! Wire contracts shared by the inventory console and its remote API.
//!
//! - `shared` - response envelope, pagination, field validation
//! - `domain` - products and raw materials
//! - `projections` - read-only reports (production capacity)

pub mod domain;
pub mod projections;
pub mod shared;
