multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Auction Phase: derived from the block timestamp, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuctionPhase {
    /// Deposits and retirements are accepted.
    Open,
    /// Prize and EGLD withdrawals are accepted.
    Closed,
}

// ============================================================
// Participant: one contribution record per address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Participant<M: ManagedTypeApi> {
    /// EGLD currently staked (deposits minus retirements)
    pub contributed: BigUint<M>,
    /// Share of the pool in basis points as of the last recompute.
    /// Stale after any deposit or retirement until a recompute runs.
    pub share_bps: u64,
    /// Prize tokens already claimed
    pub withdrawn: bool,
}
