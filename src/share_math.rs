multiversx_sc::imports!();

use crate::types::AuctionPhase;

/// Basis points denominator: 10_000 = 100%
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The sale is open on `[opened_at, opened_at + duration)` and closed from then on.
pub fn auction_phase(now: u64, opened_at: u64, duration: u64) -> AuctionPhase {
    if now < opened_at.saturating_add(duration) {
        AuctionPhase::Open
    } else {
        AuctionPhase::Closed
    }
}

/// floor(contributed * 10_000 / total), zero for an empty pool.
/// Rounding dust is allocated to nobody, so shares across the pool sum to at most 10_000.
pub fn share_bps<M: ManagedTypeApi>(contributed: &BigUint<M>, total: &BigUint<M>) -> u64 {
    if *total == 0u64 {
        return 0;
    }

    let bps = (contributed * BPS_DENOMINATOR) / total;
    // contributed <= total, so this never exceeds BPS_DENOMINATOR
    bps.to_u64().unwrap_or_default()
}

/// Penalty withheld from a retired amount.
pub fn retiree_fee<M: ManagedTypeApi>(amount: &BigUint<M>, fee_bps: u64) -> BigUint<M> {
    (amount * fee_bps) / BPS_DENOMINATOR
}

/// Prize tokens owed for a final share.
pub fn prize_amount<M: ManagedTypeApi>(prize_total: &BigUint<M>, share_bps: u64) -> BigUint<M> {
    (prize_total * share_bps) / BPS_DENOMINATOR
}

/// Even split of accrued fees, `None` when there is nobody to pay.
pub fn fee_per_dev<M: ManagedTypeApi>(fees: &BigUint<M>, dev_count: usize) -> Option<BigUint<M>> {
    if dev_count == 0 {
        return None;
    }

    Some(fees / &BigUint::from(dev_count as u64))
}
