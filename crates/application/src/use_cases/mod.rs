pub mod verify;

pub use verify::{
    CheckOutcome, CheckSubdomainUseCase, VerificationReport, VerifyRecordSetUseCase,
};
