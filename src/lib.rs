pub mod cli;
pub mod combat;
pub mod data;
