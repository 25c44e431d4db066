// Typed proxy for the CLD auction contract, in the layout produced by the
// multiversx-sc proxy generator. Keep in sync with the endpoints in lib.rs
// and maintainers.rs.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{AuctionPhase, Participant};

pub struct CldAuctionProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CldAuctionProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CldAuctionProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CldAuctionProxyMethods { wrapped_tx: tx }
    }
}

pub struct CldAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> CldAuctionProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<u64>,
        Arg7: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        dao_address: Arg0,
        treasury_address: Arg1,
        prize_token_id: Arg2,
        duration_seconds: Arg3,
        prize_token_total: Arg4,
        minimum_deposit: Arg5,
        retiree_fee_bps: Arg6,
        devs: Arg7,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&dao_address)
            .argument(&treasury_address)
            .argument(&prize_token_id)
            .argument(&duration_seconds)
            .argument(&prize_token_total)
            .argument(&minimum_deposit)
            .argument(&retiree_fee_bps)
            .argument(&devs)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> CldAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> CldAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit_etc(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositEtc")
            .original_result()
    }

    pub fn retire_from_auction<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("retireFromAuction")
            .argument(&amount)
            .original_result()
    }

    pub fn update_pooled_token_share(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updatePooledTokenShare")
            .original_result()
    }

    pub fn mass_update_pooled_token_share(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("massUpdatePooledTokenShare")
            .original_result()
    }

    pub fn update_pooled_token_share_range<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updatePooledTokenShareRange")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn withdraw_cld(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawCld")
            .original_result()
    }

    pub fn withdraw_etc(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEtc")
            .original_result()
    }

    pub fn fund_prize(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("fundPrize")
            .original_result()
    }

    pub fn set_treasury_address<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        treasury_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTreasuryAddress")
            .argument(&treasury_address)
            .original_result()
    }

    pub fn get_phase(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AuctionPhase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPhase")
            .original_result()
    }

    pub fn get_close_time(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCloseTime")
            .original_result()
    }

    pub fn check_participant<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Participant<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkParticipant")
            .argument(&address)
            .original_result()
    }

    pub fn estimate_prize<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("estimatePrize")
            .argument(&address)
            .original_result()
    }

    pub fn get_participant_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParticipantCount")
            .original_result()
    }

    pub fn get_participants<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParticipants")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_auction_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<u64, u64, BigUint<Env::Api>, BigUint<Env::Api>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuctionConfig")
            .original_result()
    }

    pub fn opened_at(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOpenedAt")
            .original_result()
    }

    pub fn duration(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDuration")
            .original_result()
    }

    pub fn minimum_deposit(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinimumDeposit")
            .original_result()
    }

    pub fn retiree_fee(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRetireeFee")
            .original_result()
    }

    pub fn prize_token_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrizeTokenId")
            .original_result()
    }

    pub fn prize_token_total(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrizeTokenTotal")
            .original_result()
    }

    pub fn treasury_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryAddress")
            .original_result()
    }

    pub fn prize_funded(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrizeFunded")
            .original_result()
    }

    pub fn total_contributed(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalContributed")
            .original_result()
    }

    pub fn etc_deducted_from_retirees(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEtcDeductedFromRetirees")
            .original_result()
    }

    pub fn etc_withdrawn(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isEtcWithdrawn")
            .original_result()
    }

    pub fn shares_stale(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("areSharesStale")
            .original_result()
    }

    pub fn share_refresh_progress(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getShareRefreshProgress")
            .original_result()
    }

    pub fn add_dev<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        dev: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addDev")
            .argument(&dev)
            .original_result()
    }

    pub fn add_devs<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        devs: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addDevs")
            .argument(&devs)
            .original_result()
    }

    pub fn rem_dev<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        dev: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("remDev")
            .argument(&dev)
            .original_result()
    }

    pub fn rem_devs<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        devs: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("remDevs")
            .argument(&devs)
            .original_result()
    }

    pub fn is_dev<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDev")
            .argument(&address)
            .original_result()
    }

    pub fn get_active_devs(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveDevs")
            .original_result()
    }

    pub fn get_devs(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDevs")
            .original_result()
    }

    pub fn get_dao_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDaoAddress")
            .original_result()
    }
}
