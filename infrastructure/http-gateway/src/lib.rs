pub mod auth_gateway;
pub mod client;
pub mod dto;
pub mod product_gateway;
mod response;
