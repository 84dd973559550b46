// Library root: slate data, the browsing core, display formatting and
// configuration, exposed for the terminal front end and integration tests.

pub mod browse;
pub mod config;
pub mod data;
pub mod display;
