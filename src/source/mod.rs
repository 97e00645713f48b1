pub mod file;
pub mod traits;

pub use file::{FileSink, FileSource};
pub use traits::{ReportSink, TicketSource};
