//! Shared proptest strategies for schema tests.

use proptest::prelude::*;

use crate::{CaseInput, CaseRecord};

/// Strategy for generating arbitrary case records with plausible ranges.
pub fn arb_case() -> impl Strategy<Value = CaseRecord> {
    (1u32..=30, 0.0f64..3000.0, 0.0f64..5000.0, 0.0f64..5000.0).prop_map(
        |(days, miles, receipts, output)| CaseRecord {
            input: CaseInput {
                trip_duration_days: days,
                miles_traveled: miles,
                total_receipts_amount: receipts,
            },
            expected_output: output,
        },
    )
}
