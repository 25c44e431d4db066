multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// AuctionRecord: what the factory remembers about each auction
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AuctionRecord<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    /// Block timestamp of the deploy; the auction opens at this time
    pub created_at: u64,
    pub duration_seconds: u64,
    pub prize_token_total: BigUint<M>,
    pub minimum_deposit: BigUint<M>,
    pub retiree_fee_bps: u64,
    /// Treasury the auction was deployed with
    pub treasury_address: ManagedAddress<M>,
}
