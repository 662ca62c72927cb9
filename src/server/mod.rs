pub mod app_state;
pub mod error;
pub mod router;
pub mod shutdown;
pub mod startup;
