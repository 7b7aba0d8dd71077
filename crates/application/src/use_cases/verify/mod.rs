mod check_subdomain;
mod verify_record_set;

pub use check_subdomain::{CheckOutcome, CheckSubdomainUseCase};
pub use verify_record_set::{VerificationReport, VerifyRecordSetUseCase};
