//! Column-oriented projection of the case list.
//!
//! The renderers consume four parallel numeric series rather than the
//! record structs, so the case list is projected once into columns that
//! stay index-aligned with the original record order. Subsets (specific
//! trip durations, receipt-amount suffixes) are expressed as boolean
//! masks over those columns.

use crate::CaseRecord;

/// Four parallel series projected from the case list.
///
/// Invariant: all four vectors have the same length, equal to the number
/// of source records, with index `i` in every series referring to the
/// same original record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Whole-day trip lengths.
    pub trip_days: Vec<u32>,
    /// Miles traveled per trip.
    pub miles: Vec<f64>,
    /// Total receipt amount per trip.
    pub receipts: Vec<f64>,
    /// Expected payout per trip.
    pub outputs: Vec<f64>,
}

impl Dataset {
    /// Projects the case list into columns, preserving record order.
    pub fn from_cases(cases: &[CaseRecord]) -> Self {
        let mut dataset = Self {
            trip_days: Vec::with_capacity(cases.len()),
            miles: Vec::with_capacity(cases.len()),
            receipts: Vec::with_capacity(cases.len()),
            outputs: Vec::with_capacity(cases.len()),
        };
        for case in cases {
            dataset.trip_days.push(case.input.trip_duration_days);
            dataset.miles.push(case.input.miles_traveled);
            dataset.receipts.push(case.input.total_receipts_amount);
            dataset.outputs.push(case.expected_output);
        }
        dataset
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.trip_days.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.trip_days.is_empty()
    }

    /// Marks records whose trip duration equals `days` exactly.
    pub fn duration_mask(&self, days: u32) -> Vec<bool> {
        self.trip_days.iter().map(|d| *d == days).collect()
    }

    /// Marks records whose receipt amount, rendered through `f64`'s
    /// `Display`, ends in one of the given literal suffixes.
    ///
    /// The test is over the rendered string, not the numeric value:
    /// `42.49` renders as `"42.49"` and matches `".49"`, while `42.5`
    /// renders as `"42.5"` and does not. Trailing zeros are dropped by
    /// `Display`, so `10.00` renders as `"10"` and matches nothing.
    pub fn receipt_suffix_mask(&self, suffixes: &[&str]) -> Vec<bool> {
        self.receipts
            .iter()
            .map(|r| {
                let rendered = r.to_string();
                suffixes.iter().any(|s| rendered.ends_with(s))
            })
            .collect()
    }
}
