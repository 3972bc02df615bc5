pub mod config;
pub mod generate;
pub mod sample;
pub mod serve;
pub mod validate;
