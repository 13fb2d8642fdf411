pub mod bru_client;
pub mod http;
pub mod models;
pub mod output;

pub use bru_client::BruClient;
pub use models::{BruConfig, RequestShowView, RunResultView};
