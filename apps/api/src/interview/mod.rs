// Mock-interview features: question generation and answer evaluation.
// JSON in, JSON out. No document extraction involved.

pub mod handlers;
pub mod models;
pub mod prompts;
