pub mod record;
pub mod remapper;
pub mod transformer;

pub use record::{AlignmentRecord, ZERO_QUALITY};
pub use remapper::IdentifierRemapper;
pub use transformer::{transform_records, RecordSink, Transformer};
