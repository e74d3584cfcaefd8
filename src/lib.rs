pub mod clipboard;
pub mod configuration;
pub mod domain;
pub mod generate_button;
pub mod page;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
