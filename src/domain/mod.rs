pub mod log;
pub mod metric;
pub mod profile;
pub mod span;

pub use log::LogRecord;
pub use metric::{MetricRecord, MetricValue};
pub use profile::ProfileRecord;
pub use span::{SpanKind, SpanRecord, StatusCode};
