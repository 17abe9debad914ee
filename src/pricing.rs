//! Pricing tiers for the request-volume calculator.
//!
//! Costs are tracked in integer millidollars (one extra request past the Pro
//! cap bills exactly one) and converted to `f64` once, so tier boundaries and
//! the free tier's zero are exact.

use crate::models::{PlanTier, PriceQuote};

pub const FREE_TIER_MAX_REQUESTS: u64 = 10_000;
pub const PRO_TIER_MAX_REQUESTS: u64 = 100_000;
const PRO_TIER_FLAT_MILLIS: u64 = 99_000;

pub fn price_for(requests: u64) -> PriceQuote {
    let (cost_millis, tier) = if requests <= FREE_TIER_MAX_REQUESTS {
        (0, PlanTier::Free)
    } else if requests <= PRO_TIER_MAX_REQUESTS {
        (PRO_TIER_FLAT_MILLIS, PlanTier::Pro)
    } else {
        (
            PRO_TIER_FLAT_MILLIS + (requests - PRO_TIER_MAX_REQUESTS),
            PlanTier::Enterprise,
        )
    };

    PriceQuote {
        cost: cost_millis as f64 / 1000.0,
        tier,
    }
}
