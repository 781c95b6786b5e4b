pub mod app_state;
pub mod errors;
pub mod feedback_models;
pub mod wrapper_models;
