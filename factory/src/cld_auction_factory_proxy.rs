// Typed proxy for the CLD auction factory, in the layout produced by the
// multiversx-sc proxy generator. Keep in sync with the endpoints in lib.rs.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::AuctionRecord;

pub struct CldAuctionFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CldAuctionFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CldAuctionFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CldAuctionFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct CldAuctionFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> CldAuctionFactoryProxyMethods<Env, From, (), Gas>
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
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        dao_address: Arg0,
        treasury_address: Arg1,
        prize_token_id: Arg2,
        auction_template: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&dao_address)
            .argument(&treasury_address)
            .argument(&prize_token_id)
            .argument(&auction_template)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> CldAuctionFactoryProxyMethods<Env, From, To, Gas>
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
impl<Env, From, To, Gas> CldAuctionFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn new_cld_auction<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        duration_seconds: Arg0,
        prize_token_total: Arg1,
        minimum_deposit: Arg2,
        retiree_fee_bps: Arg3,
        devs: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("newCldAuction")
            .argument(&duration_seconds)
            .argument(&prize_token_total)
            .argument(&minimum_deposit)
            .argument(&retiree_fee_bps)
            .argument(&devs)
            .original_result()
    }

    pub fn set_auction_template<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        auction_template: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAuctionTemplate")
            .argument(&auction_template)
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

    pub fn see_auction_data<
        Arg0: ProxyArg<u64>,
    >(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AuctionRecord<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("seeAuctionData")
            .argument(&index)
            .original_result()
    }

    pub fn get_auction_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuctionCount")
            .original_result()
    }

    pub fn get_auctions<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuctions")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn dao_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDaoAddress")
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

    pub fn prize_token_id(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrizeTokenId")
            .original_result()
    }

    pub fn auction_template(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuctionTemplate")
            .original_result()
    }
}
