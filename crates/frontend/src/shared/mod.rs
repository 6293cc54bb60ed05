pub mod api_utils;
pub mod components;
pub mod gateway;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod resource;
