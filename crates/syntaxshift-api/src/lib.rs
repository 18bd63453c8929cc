pub mod handlers;
pub mod orchestrator;
pub mod routes;
pub mod server;
pub mod state;

pub use handlers::*;
pub use orchestrator::*;
pub use routes::*;
pub use server::*;
pub use state::*;
