mod permission_source;
mod state_builder;

pub use state_builder::build_app_state;
