pub mod client;
pub mod openai;

pub use client::ModelClient;
pub use openai::OpenAiClient;
