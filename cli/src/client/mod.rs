pub mod clirk_client;
pub mod clirk_client_models;
pub mod http;

pub use clirk_client::ClirkClient;
pub use clirk_client_models::{
    ClirkConfig, RequestDetails, RequestExecutionResult, RequestGroup, RequestInfo,
};
