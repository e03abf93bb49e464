pub mod errors;
pub mod flash;
pub mod forms;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;
pub mod tx;
pub mod views;

pub use startup::run;
