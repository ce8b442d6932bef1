pub mod activation;
pub mod config;
pub mod node;
pub mod nodes;
