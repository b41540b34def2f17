//! HTTP gateway

mod gateway;

pub use gateway::{HttpGateway, HttpGatewayBuilder};
