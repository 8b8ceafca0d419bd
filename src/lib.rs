#[macro_use]
extern crate rocket;

pub mod catchers;
pub mod configuration;
pub mod content;
pub mod cors;
pub mod domain;
pub mod email;
pub mod guards;
pub mod port_saver;
pub mod routes;
pub mod startup;
pub mod telemetry;
