pub mod config;
pub mod del;
pub mod edit;
pub mod punch;
pub mod report;
pub mod special;
pub mod today;
pub mod week;
