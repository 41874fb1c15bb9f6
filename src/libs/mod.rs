pub mod config;
pub mod context;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod probe;
pub mod report;
pub mod runner;
pub mod view;
