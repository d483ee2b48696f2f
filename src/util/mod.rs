pub mod logging;
pub mod progress_store;
pub mod user_state;
