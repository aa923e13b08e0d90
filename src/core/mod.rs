pub mod accounting;
pub mod punch;
pub mod report;
pub mod special;
pub mod week;
