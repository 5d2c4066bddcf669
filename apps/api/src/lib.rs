pub mod config;
pub mod contract;
pub mod dashboard;
pub mod errors;
pub mod extraction;
pub mod history;
pub mod interview;
pub mod llm_client;
pub mod resume;
pub mod routes;
pub mod state;
