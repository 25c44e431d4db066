#![no_std]

multiversx_sc::imports!();

pub mod cld_auction_proxy;
pub mod errors;
pub mod maintainers;
pub mod share_math;
pub mod types;

use errors::*;
use share_math::BPS_DENOMINATOR;
use types::{AuctionPhase, Participant};

// ============================================================
// Contract
// Participants pool EGLD during a fixed window and receive a
// pro-rata slice of a fixed prize token amount once it closes.
// Early exits pay a fee that is split among the devs.
// ============================================================

#[multiversx_sc::contract]
pub trait CldAuction: maintainers::MaintainersModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        dao_address: ManagedAddress,
        treasury_address: ManagedAddress,
        prize_token_id: TokenIdentifier,
        duration_seconds: u64,
        prize_token_total: BigUint,
        minimum_deposit: BigUint,
        retiree_fee_bps: u64,
        devs: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(duration_seconds > 0, ERR_INVALID_DURATION);
        require!(prize_token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(prize_token_total > 0u64, ERR_INVALID_PRIZE_TOTAL);
        require!(retiree_fee_bps < BPS_DENOMINATOR, ERR_INVALID_RETIREE_FEE);

        self.dao_address().set(&dao_address);
        self.treasury_address().set(&treasury_address);
        self.prize_token_id().set(&prize_token_id);
        self.prize_token_total().set(&prize_token_total);
        self.minimum_deposit().set(&minimum_deposit);
        self.retiree_fee().set(retiree_fee_bps);
        self.opened_at().set(self.blockchain().get_block_timestamp());
        self.duration().set(duration_seconds);

        for dev in devs {
            self.insert_dev(&dev);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: depositEtc
    // Shares are not recomputed here; they go stale until the
    // next updatePooledTokenShare / massUpdatePooledTokenShare.
    // ========================================================

    #[endpoint(depositEtc)]
    #[payable("EGLD")]
    fn deposit_etc(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(self.get_phase() == AuctionPhase::Open, ERR_DEPOSIT_SALE_OVER);
        require!(
            payment_amount >= self.minimum_deposit().get(),
            ERR_DEPOSIT_TOO_LOW
        );

        self.contributed(&caller).update(|c| *c += &payment_amount);
        self.total_contributed().update(|t| *t += &payment_amount);
        self.participants().insert(caller.clone());
        self.mark_shares_stale();

        let total = self.total_contributed().get();
        self.etc_deposited_event(&caller, &payment_amount, &total);
    }

    // ========================================================
    // ENDPOINT: retireFromAuction
    // Early exit while the sale is open. The fee stays on the
    // contract until withdrawEtc splits it among the devs.
    // ========================================================

    #[endpoint(retireFromAuction)]
    fn retire_from_auction(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        require!(self.get_phase() == AuctionPhase::Open, ERR_RETIRE_SALE_OVER);
        require!(amount > 0u64, ERR_RETIRE_ZERO);

        let staked = self.contributed(&caller).get();
        require!(amount <= staked, ERR_RETIRE_EXCEEDS_STAKE);

        let fee = share_math::retiree_fee(&amount, self.retiree_fee().get());
        let payout = &amount - &fee;

        self.contributed(&caller).set(staked - &amount);
        self.total_contributed().update(|t| *t -= &amount);
        self.etc_deducted_from_retirees().update(|f| *f += &fee);
        self.mark_shares_stale();

        self.send().direct_egld(&caller, &payout);
        self.participant_retired_event(&caller, &amount, &fee);
    }

    // ========================================================
    // ENDPOINT: share recompute
    // ========================================================

    /// Recomputes the caller's stored share against the current pool.
    #[endpoint(updatePooledTokenShare)]
    fn update_pooled_token_share(&self) -> u64 {
        let caller = self.blockchain().get_caller();
        let total = self.total_contributed().get();
        self.refresh_share(&caller, &total)
    }

    /// Recomputes every stored share in one pass and clears the stale flag.
    /// Gas grows with the participant count; large auctions should page
    /// through updatePooledTokenShareRange instead.
    #[endpoint(massUpdatePooledTokenShare)]
    fn mass_update_pooled_token_share(&self) {
        let total = self.total_contributed().get();
        for participant in self.participants().iter() {
            self.refresh_share(&participant, &total);
        }
        self.shares_stale().set(false);
        self.share_refresh_progress().set(self.participants().len() as u64);

        self.updated_pooled_token_share_event(self.participants().len() as u64);
    }

    /// Recomputes the stored shares of participants [from, from + count).
    /// Ranges have to be contiguous from index 0; the stale flag clears once
    /// they reach the last participant with no deposit or retirement between.
    #[endpoint(updatePooledTokenShareRange)]
    fn update_pooled_token_share_range(&self, from: u64, count: u64) -> u64 {
        let total = self.total_contributed().get();
        let participant_count = self.participants().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), participant_count);

        for index in from..end {
            let participant = self.participants().get_by_index(index as usize + 1);
            self.refresh_share(&participant, &total);
        }

        let progress = self.share_refresh_progress().get();
        if from <= progress && end > progress {
            self.share_refresh_progress().set(end);
            if end == participant_count {
                self.shares_stale().set(false);
            }
        }

        let updated = end.saturating_sub(from);
        self.updated_pooled_token_share_event(updated);
        updated
    }

    // ========================================================
    // ENDPOINT: withdrawCld
    // Pays the caller's slice of the prize. Contributions are
    // frozen once the sale closes, so the share computed here is
    // final and independent of other withdrawals.
    // ========================================================

    #[endpoint(withdrawCld)]
    fn withdraw_cld(&self) {
        let caller = self.blockchain().get_caller();

        require!(self.get_phase() == AuctionPhase::Closed, ERR_CLD_SALE_NOT_OVER);
        require!(!self.cld_withdrawn(&caller).get(), ERR_CLD_ALREADY_WITHDRAWN);

        let total = self.total_contributed().get();
        let share = self.refresh_share(&caller, &total);
        require!(share > 0, ERR_CLD_NO_SHARE);

        let amount = share_math::prize_amount(&self.prize_token_total().get(), share);
        self.cld_withdrawn(&caller).set(true);

        if amount > 0u64 {
            self.send()
                .direct_esdt(&caller, &self.prize_token_id().get(), 0, &amount);
        }
        self.cld_withdrawed_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawEtc
    // Routes the pooled EGLD to the treasury and the retiree
    // fees to the devs, once.
    // ========================================================

    #[endpoint(withdrawEtc)]
    fn withdraw_etc(&self) {
        let caller = self.blockchain().get_caller();

        require!(self.get_phase() == AuctionPhase::Closed, ERR_ETC_SALE_NOT_OVER);
        require!(
            self.is_dev(&caller) || caller == self.dao_address().get(),
            ERR_ETC_NOT_ALLOWED
        );
        require!(!self.etc_withdrawn().get(), ERR_ETC_ALREADY_WITHDRAWN);

        let treasury_amount = self.total_contributed().get();
        let fees = self.etc_deducted_from_retirees().get();
        require!(
            treasury_amount > 0u64 || fees > 0u64,
            ERR_ETC_NOTHING_TO_WITHDRAW
        );

        self.etc_withdrawn().set(true);

        if treasury_amount > 0u64 {
            self.send()
                .direct_egld(&self.treasury_address().get(), &treasury_amount);
        }
        let fees_distributed = self.distribute_dev_fees(&fees);

        self.etcd_withdrawed_event(&treasury_amount, &fees_distributed);
    }

    // ========================================================
    // ENDPOINT: fundPrize
    // Tops up the prize pool, never past prize_token_total.
    // ========================================================

    #[payable("*")]
    #[endpoint(fundPrize)]
    fn fund_prize(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();

        require!(
            payment.token_identifier == self.prize_token_id().get() && payment.token_nonce == 0,
            ERR_WRONG_PRIZE_TOKEN
        );

        let funded = self.prize_funded().get() + &payment.amount;
        require!(funded <= self.prize_token_total().get(), ERR_PRIZE_EXCEEDED);
        self.prize_funded().set(&funded);

        self.prize_funded_event(&caller, &payment.amount, &funded);
    }

    // ========================================================
    // ENDPOINT: setTreasuryAddress (DAO only)
    // ========================================================

    #[endpoint(setTreasuryAddress)]
    fn set_treasury_address(&self, treasury_address: ManagedAddress) {
        self.require_dao_caller();
        require!(!self.etc_withdrawn().get(), ERR_ETC_ALREADY_WITHDRAWN);

        self.treasury_address().set(&treasury_address);
        self.treasury_changed_event(&treasury_address);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn mark_shares_stale(&self) {
        self.shares_stale().set(true);
        self.share_refresh_progress().clear();
    }

    fn refresh_share(&self, participant: &ManagedAddress, total: &BigUint) -> u64 {
        let share = share_math::share_bps(&self.contributed(participant).get(), total);
        self.share_bps(participant).set(share);
        share
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPhase)]
    fn get_phase(&self) -> AuctionPhase {
        share_math::auction_phase(
            self.blockchain().get_block_timestamp(),
            self.opened_at().get(),
            self.duration().get(),
        )
    }

    #[view(getCloseTime)]
    fn get_close_time(&self) -> u64 {
        self.opened_at().get().saturating_add(self.duration().get())
    }

    /// Returns the stored share, which may be stale (see areSharesStale).
    #[view(checkParticipant)]
    fn check_participant(&self, address: &ManagedAddress) -> Participant<Self::Api> {
        Participant {
            contributed: self.contributed(address).get(),
            share_bps: self.share_bps(address).get(),
            withdrawn: self.cld_withdrawn(address).get(),
        }
    }

    /// Prize owed at the current pool totals, regardless of stored shares.
    #[view(estimatePrize)]
    fn estimate_prize(&self, address: &ManagedAddress) -> BigUint {
        let share = share_math::share_bps(
            &self.contributed(address).get(),
            &self.total_contributed().get(),
        );
        share_math::prize_amount(&self.prize_token_total().get(), share)
    }

    #[view(getParticipantCount)]
    fn get_participant_count(&self) -> u64 {
        self.participants().len() as u64
    }

    #[view(getParticipants)]
    fn get_participants(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.participants().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, participant) in self.participants().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(participant);
            }
        }
        result
    }

    #[view(getAuctionConfig)]
    fn get_auction_config(&self) -> MultiValue5<u64, u64, BigUint, BigUint, u64> {
        (
            self.opened_at().get(),
            self.duration().get(),
            self.minimum_deposit().get(),
            self.prize_token_total().get(),
            self.retiree_fee().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ETCDeposited")]
    fn etc_deposited_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_contributed: &BigUint,
    );

    #[event("ParticipantRetired")]
    fn participant_retired_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        fee: &BigUint,
    );

    #[event("UpdatedPooledTokenShare")]
    fn updated_pooled_token_share_event(&self, #[indexed] participant_count: u64);

    #[event("CLDWithdrawed")]
    fn cld_withdrawed_event(&self, #[indexed] participant: &ManagedAddress, amount: &BigUint);

    #[event("ETCDWithdrawed")]
    fn etcd_withdrawed_event(&self, #[indexed] treasury_amount: &BigUint, fees_distributed: &BigUint);

    #[event("PrizeFunded")]
    fn prize_funded_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] amount: &BigUint,
        funded_total: &BigUint,
    );

    #[event("TreasuryChanged")]
    fn treasury_changed_event(&self, #[indexed] treasury_address: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getOpenedAt)]
    #[storage_mapper("openedAt")]
    fn opened_at(&self) -> SingleValueMapper<u64>;

    #[view(getDuration)]
    #[storage_mapper("duration")]
    fn duration(&self) -> SingleValueMapper<u64>;

    #[view(getMinimumDeposit)]
    #[storage_mapper("minimumDeposit")]
    fn minimum_deposit(&self) -> SingleValueMapper<BigUint>;

    #[view(getRetireeFee)]
    #[storage_mapper("retireeFee")]
    fn retiree_fee(&self) -> SingleValueMapper<u64>;

    #[view(getPrizeTokenId)]
    #[storage_mapper("prizeTokenId")]
    fn prize_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPrizeTokenTotal)]
    #[storage_mapper("prizeTokenTotal")]
    fn prize_token_total(&self) -> SingleValueMapper<BigUint>;

    #[view(getTreasuryAddress)]
    #[storage_mapper("treasuryAddress")]
    fn treasury_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Pool state ──

    #[view(getPrizeFunded)]
    #[storage_mapper("prizeFunded")]
    fn prize_funded(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalContributed)]
    #[storage_mapper("totalContributed")]
    fn total_contributed(&self) -> SingleValueMapper<BigUint>;

    #[view(getEtcDeductedFromRetirees)]
    #[storage_mapper("etcDeductedFromRetirees")]
    fn etc_deducted_from_retirees(&self) -> SingleValueMapper<BigUint>;

    #[view(isEtcWithdrawn)]
    #[storage_mapper("etcWithdrawn")]
    fn etc_withdrawn(&self) -> SingleValueMapper<bool>;

    #[view(areSharesStale)]
    #[storage_mapper("sharesStale")]
    fn shares_stale(&self) -> SingleValueMapper<bool>;

    /// Participants refreshed since the last deposit or retirement.
    #[view(getShareRefreshProgress)]
    #[storage_mapper("shareRefreshProgress")]
    fn share_refresh_progress(&self) -> SingleValueMapper<u64>;

    // ── Participant registry ──

    #[storage_mapper("participants")]
    fn participants(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("contributed")]
    fn contributed(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("shareBps")]
    fn share_bps(&self, participant: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("cldWithdrawn")]
    fn cld_withdrawn(&self, participant: &ManagedAddress) -> SingleValueMapper<bool>;
}
