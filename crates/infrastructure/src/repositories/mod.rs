pub mod record_set_file;

pub use record_set_file::RecordSetFile;
