pub mod server;
pub mod webhook;

pub use server::ApiServer;
pub use webhook::AppState;
