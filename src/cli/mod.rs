pub mod args;
pub mod handlers;
pub mod plan_wizard;
