pub mod followup;
pub mod interactions;
pub mod router;
pub mod server;
pub mod state;

pub use state::AppState;
