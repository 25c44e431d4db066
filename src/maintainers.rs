multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_DEV, ERR_NOT_DEV, ERR_NO_ACTIVE_DEVS, ERR_UNAUTHORIZED,
};
use crate::share_math;

// ============================================================
// Maintainer ("dev") set
// Devs split the fees withheld from retirees. Membership is
// managed by the DAO only.
// ============================================================

#[multiversx_sc::module]
pub trait MaintainersModule {
    #[endpoint(addDev)]
    fn add_dev(&self, dev: ManagedAddress) {
        self.require_dao_caller();
        self.insert_dev(&dev);
    }

    /// Fails as a whole if any address is already a dev.
    #[endpoint(addDevs)]
    fn add_devs(&self, devs: MultiValueEncoded<ManagedAddress>) {
        self.require_dao_caller();
        for dev in devs {
            self.insert_dev(&dev);
        }
    }

    #[endpoint(remDev)]
    fn rem_dev(&self, dev: ManagedAddress) {
        self.require_dao_caller();
        self.remove_dev(&dev);
    }

    /// Fails as a whole if any address is not a dev.
    #[endpoint(remDevs)]
    fn rem_devs(&self, devs: MultiValueEncoded<ManagedAddress>) {
        self.require_dao_caller();
        for dev in devs {
            self.remove_dev(&dev);
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_dao_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.dao_address().get(), ERR_UNAUTHORIZED);
    }

    fn insert_dev(&self, dev: &ManagedAddress) {
        require!(self.devs().insert(dev.clone()), ERR_ALREADY_DEV);
        self.new_dev_added_event(dev);
    }

    fn remove_dev(&self, dev: &ManagedAddress) {
        require!(self.devs().swap_remove(dev), ERR_NOT_DEV);
        self.dev_removed_event(dev);
    }

    /// Pays floor(fees / active devs) to every current dev and returns
    /// the total paid out. The remainder stays on the contract.
    fn distribute_dev_fees(&self, fees: &BigUint) -> BigUint {
        if *fees == 0u64 {
            return BigUint::zero();
        }

        let dev_count = self.devs().len();
        let Some(per_dev) = share_math::fee_per_dev(fees, dev_count) else {
            sc_panic!(ERR_NO_ACTIVE_DEVS);
        };
        if per_dev == 0u64 {
            return BigUint::zero();
        }

        for dev in self.devs().iter() {
            self.send().direct_egld(&dev, &per_dev);
        }

        per_dev * dev_count as u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isDev)]
    fn is_dev(&self, address: &ManagedAddress) -> bool {
        self.devs().contains(address)
    }

    #[view(getActiveDevs)]
    fn get_active_devs(&self) -> u64 {
        self.devs().len() as u64
    }

    #[view(getDevs)]
    fn get_devs(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for dev in self.devs().iter() {
            result.push(dev);
        }
        result
    }

    #[view(getDaoAddress)]
    fn get_dao_address(&self) -> ManagedAddress {
        self.dao_address().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("NewDevAdded")]
    fn new_dev_added_event(&self, #[indexed] dev: &ManagedAddress);

    #[event("DevRemoved")]
    fn dev_removed_event(&self, #[indexed] dev: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("daoAddress")]
    fn dao_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("devs")]
    fn devs(&self) -> UnorderedSetMapper<ManagedAddress>;
}
