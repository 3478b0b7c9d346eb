pub mod report_writer;

pub use report_writer::{render_table, ReportFormat, ReportWriter};
