mod builders;

pub use builders::{fixture_record_set, RecordBuilder};
