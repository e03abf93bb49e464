pub mod errors;
pub mod db;
pub mod company;
pub mod computer;
pub mod person;

#[cfg(test)]
mod tests;
