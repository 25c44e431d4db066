#![no_std]

multiversx_sc::imports!();

pub mod cld_auction_factory_proxy;
pub mod errors;
pub mod types;

use cld_auction::cld_auction_proxy::CldAuctionProxy;
use errors::*;
use types::AuctionRecord;

// ============================================================
// Auction factory
// Deploys CLD auctions as copies of a template contract. Each
// auction is its own contract with its own pool; the factory
// only keeps a record of what it deployed.
// ============================================================

#[multiversx_sc::contract]
pub trait CldAuctionFactory {
    #[init]
    fn init(
        &self,
        dao_address: ManagedAddress,
        treasury_address: ManagedAddress,
        prize_token_id: TokenIdentifier,
        auction_template: ManagedAddress,
    ) {
        require!(prize_token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            self.blockchain().is_smart_contract(&auction_template),
            ERR_INVALID_TEMPLATE
        );

        self.dao_address().set(&dao_address);
        self.treasury_address().set(&treasury_address);
        self.prize_token_id().set(&prize_token_id);
        self.auction_template().set(&auction_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: newCldAuction (DAO only)
    // Argument validation happens in the auction's init; a
    // rejected init fails the whole call.
    // ========================================================

    #[endpoint(newCldAuction)]
    fn new_cld_auction(
        &self,
        duration_seconds: u64,
        prize_token_total: BigUint,
        minimum_deposit: BigUint,
        retiree_fee_bps: u64,
        devs: MultiValueEncoded<ManagedAddress>,
    ) -> ManagedAddress {
        self.require_dao_caller();

        let treasury_address = self.treasury_address().get();
        let auction_address = self
            .tx()
            .typed(CldAuctionProxy)
            .init(
                self.dao_address().get(),
                &treasury_address,
                self.prize_token_id().get(),
                duration_seconds,
                &prize_token_total,
                &minimum_deposit,
                retiree_fee_bps,
                devs,
            )
            .from_source(self.auction_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        let created_at = self.blockchain().get_block_timestamp();
        let index = self.auctions().len() as u64;
        self.auctions().push(&AuctionRecord {
            address: auction_address.clone(),
            created_at,
            duration_seconds,
            prize_token_total,
            minimum_deposit,
            retiree_fee_bps,
            treasury_address,
        });

        self.new_auction_event(&auction_address, index, created_at);
        auction_address
    }

    // ========================================================
    // ENDPOINT: settings for future auctions (DAO only)
    // Auctions already deployed keep their own copies.
    // ========================================================

    #[endpoint(setAuctionTemplate)]
    fn set_auction_template(&self, auction_template: ManagedAddress) {
        self.require_dao_caller();
        require!(
            self.blockchain().is_smart_contract(&auction_template),
            ERR_INVALID_TEMPLATE
        );
        self.auction_template().set(&auction_template);
    }

    #[endpoint(setTreasuryAddress)]
    fn set_treasury_address(&self, treasury_address: ManagedAddress) {
        self.require_dao_caller();
        self.treasury_address().set(&treasury_address);
    }

    fn require_dao_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.dao_address().get(), ERR_UNAUTHORIZED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Auctions are numbered from 0 in deploy order.
    #[view(seeAuctionData)]
    fn see_auction_data(&self, index: u64) -> AuctionRecord<Self::Api> {
        require!(index < self.auctions().len() as u64, ERR_NO_SUCH_AUCTION);
        self.auctions().get(index as usize + 1)
    }

    #[view(getAuctionCount)]
    fn get_auction_count(&self) -> u64 {
        self.auctions().len() as u64
    }

    #[view(getAuctions)]
    fn get_auctions(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.auctions().len() as u64);
        for index in from..end {
            result.push(self.auctions().get(index as usize + 1).address);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("NewAuction")]
    fn new_auction_event(
        &self,
        #[indexed] auction_address: &ManagedAddress,
        #[indexed] index: u64,
        created_at: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getDaoAddress)]
    #[storage_mapper("daoAddress")]
    fn dao_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTreasuryAddress)]
    #[storage_mapper("treasuryAddress")]
    fn treasury_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPrizeTokenId)]
    #[storage_mapper("prizeTokenId")]
    fn prize_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getAuctionTemplate)]
    #[storage_mapper("auctionTemplate")]
    fn auction_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("auctions")]
    fn auctions(&self) -> VecMapper<AuctionRecord<Self::Api>>;
}
