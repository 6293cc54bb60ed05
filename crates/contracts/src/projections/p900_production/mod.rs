pub mod dto;

pub use dto::ProductionRow;
