pub mod client;
pub mod gateway;
pub mod groq;
pub mod prompts;

pub use client::*;
pub use gateway::*;
pub use groq::*;
