//! Basis-point fee math shared by the claim, release, and refund paths.
//!
//! All splits follow the same shape:
//!
//! ```text
//! fee(amount) = amount * fee_bps / 10_000
//! net(amount) = amount - fee(amount)
//! ```
//!
//! Integer division rounds the fee down, so `net + fee == amount` always and
//! the platform absorbs the rounding loss, never the payee.

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOM: i128 = 10_000;

/// `amount * bps / 10_000`, `None` on overflow.
pub fn share_of(amount: i128, bps: u32) -> Option<i128> {
    amount
        .checked_mul(bps as i128)?
        .checked_div(BPS_DENOM)
}

/// Platform cut of a creator-bound payout.
pub fn platform_fee(amount: i128, fee_bps: u32) -> Option<i128> {
    share_of(amount, fee_bps)
}

/// What the creator actually receives.
pub fn net_of_fee(amount: i128, fee_bps: u32) -> Option<i128> {
    let fee = platform_fee(amount, fee_bps)?;
    amount.checked_sub(fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_and_net_partition_the_amount() {
        let amount = 300;
        let fee = platform_fee(amount, 200).unwrap();
        let net = net_of_fee(amount, 200).unwrap();
        assert_eq!(fee, 6);
        assert_eq!(net, 294);
        assert_eq!(fee + net, amount);
    }

    #[test]
    fn fee_rounds_down() {
        // 2% of 49 is 0.98 — the platform gets nothing.
        assert_eq!(platform_fee(49, 200), Some(0));
        assert_eq!(net_of_fee(49, 200), Some(49));
    }

    #[test]
    fn zero_fee_passes_everything_through() {
        assert_eq!(platform_fee(1_000, 0), Some(0));
        assert_eq!(net_of_fee(1_000, 0), Some(1_000));
    }

    #[test]
    fn full_fee_takes_everything() {
        assert_eq!(platform_fee(1_000, 10_000), Some(1_000));
        assert_eq!(net_of_fee(1_000, 10_000), Some(0));
    }

    #[test]
    fn share_of_scales_tranches() {
        // 30% of an overfunded 1_500 escrow.
        assert_eq!(share_of(1_500, 3_000), Some(450));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert_eq!(share_of(i128::MAX, 2), None);
    }
}
