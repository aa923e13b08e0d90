pub mod csv;

pub use csv::{render_report, write_report};
