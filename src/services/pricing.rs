//! Annual savings simulator
//!
//! Pure calculation backing the pricing page: a fixed 15% discount on the
//! annualized price, with both outputs rounded to whole currency units.

use crate::models::home::{AnnualSavings, BillingCycle};

/// Fixed discount applied to the annualized price
pub const DISCOUNT_PERCENTAGE: u32 = 15;

/// Simulate the discounted annual price for a monthly or yearly input price
pub fn annual_savings(price: f64, billing_cycle: BillingCycle) -> AnnualSavings {
    let monthly = match billing_cycle {
        BillingCycle::Monthly => price,
        BillingCycle::Yearly => price / 12.0,
    };

    let yearly = monthly * 12.0;
    let discounted = yearly * (1.0 - DISCOUNT_PERCENTAGE as f64 / 100.0);
    let savings = yearly - discounted;

    AnnualSavings {
        monthly_price: monthly.round() as i64,
        yearly_price: discounted.round() as i64,
        savings: savings.round() as i64,
        discount_percentage: DISCOUNT_PERCENTAGE,
        billing_cycle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_price_of_100() {
        let result = annual_savings(100.0, BillingCycle::Monthly);
        assert_eq!(result.monthly_price, 100);
        assert_eq!(result.yearly_price, 1020);
        assert_eq!(result.savings, 180);
        assert_eq!(result.discount_percentage, 15);
        assert_eq!(result.billing_cycle, BillingCycle::Monthly);
    }

    #[test]
    fn yearly_input_is_normalized_to_monthly() {
        let result = annual_savings(1200.0, BillingCycle::Yearly);
        assert_eq!(result.monthly_price, 100);
        assert_eq!(result.yearly_price, 1020);
        assert_eq!(result.savings, 180);
    }

    #[test]
    fn outputs_are_rounded_to_whole_units() {
        let result = annual_savings(99.99, BillingCycle::Monthly);
        // yearly 1199.88 -> discounted 1019.898, savings 179.982
        assert_eq!(result.monthly_price, 100);
        assert_eq!(result.yearly_price, 1020);
        assert_eq!(result.savings, 180);
    }
}
