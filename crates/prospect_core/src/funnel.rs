//! Funnel propagation
//!
//! Pushes a lead volume through the conversion chain. Counts are expected
//! values, so fractional results are kept as-is.

use crate::model::{FunnelCounts, FunnelRates};

/// Propagate `total_leads` through the funnel.
///
/// Pure multiplication chain with no rounding and no validation; the
/// `simulate`/sweep entry points validate rates and volumes before calling.
#[must_use]
pub fn propagate(total_leads: f64, rates: &FunnelRates) -> FunnelCounts {
    let replies = total_leads * rates.response;
    let no_replies = total_leads - replies;
    let qualified = replies * rates.qualification;
    let booked = qualified * rates.booking;

    FunnelCounts {
        replies,
        no_replies,
        qualified,
        booked,
    }
}
