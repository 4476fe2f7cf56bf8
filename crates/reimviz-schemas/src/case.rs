//! Case record schema for the labeled reimbursement dataset.
//!
//! The source file is a JSON array of input/expected-output pairs. Each
//! record describes one trip (duration, mileage, claimed receipts) along
//! with the payout the legacy system produced for it.

use serde::{Deserialize, Serialize};

/// One labeled reimbursement case: trip inputs plus the expected payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Trip features fed to the reimbursement system.
    pub input: CaseInput,
    /// The payout the system is known to have produced for this trip.
    pub expected_output: f64,
}

/// Input features of a single trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    /// Whole-day trip length.
    pub trip_duration_days: u32,
    /// Distance traveled over the whole trip.
    pub miles_traveled: f64,
    /// Total currency amount claimed across all receipts.
    pub total_receipts_amount: f64,
}
