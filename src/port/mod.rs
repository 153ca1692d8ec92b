pub mod log_exporter;
pub mod metric_exporter;
pub mod profile_exporter;
pub mod span_exporter;

pub use log_exporter::LogRecordExporter;
pub use metric_exporter::MetricExporter;
pub use profile_exporter::ProfileExporter;
pub use span_exporter::SpanExporter;
