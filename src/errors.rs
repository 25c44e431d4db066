// Revert messages, one per failure kind the auction can report.

pub const ERR_UNAUTHORIZED: &str = "This can only be done by the DAO";

pub const ERR_DEPOSIT_SALE_OVER: &str = "CLDAuction.DepositETC: The sale is over";
pub const ERR_DEPOSIT_TOO_LOW: &str = "CLDAuction.DepositETC: Deposit amount not high enough";

pub const ERR_RETIRE_SALE_OVER: &str =
    "CLDAuction.RetireFromAuction: The sale is over, you can only withdraw your CLD";
pub const ERR_RETIRE_EXCEEDS_STAKE: &str =
    "CLDAuction.RetireFromAuction: You can't withdraw this many ETC";
pub const ERR_RETIRE_ZERO: &str = "CLDAuction.RetireFromAuction: Retire amount must be positive";

pub const ERR_CLD_SALE_NOT_OVER: &str = "CLDAuction.WithdrawCLD: The sale is not over yet";
pub const ERR_CLD_NO_SHARE: &str = "CLDAuction.WithdrawCLD: You didn't buy any CLD";
pub const ERR_CLD_ALREADY_WITHDRAWN: &str = "CLDAuction.WithdrawCLD: Already withdrawn";

pub const ERR_ETC_SALE_NOT_OVER: &str = "CLDAuction.WithdrawETC: The sale is not over yet";
pub const ERR_ETC_ALREADY_WITHDRAWN: &str = "CLDAuction.WithdrawETC: Ether already withdrawn";
pub const ERR_ETC_NOTHING_TO_WITHDRAW: &str = "CLDAuction.WithdrawETC: No ether on this contract";
pub const ERR_ETC_NOT_ALLOWED: &str = "CLDAuction.WithdrawETC: This can only be done by a dev or the DAO";
pub const ERR_NO_ACTIVE_DEVS: &str = "CLDAuction.WithdrawETC: No active devs";

pub const ERR_ALREADY_DEV: &str = "CLDAuction.AddDev: This user is already a dev";
pub const ERR_NOT_DEV: &str = "CLDAuction.RemDev: This user is not a dev";

pub const ERR_WRONG_PRIZE_TOKEN: &str = "CLDAuction.FundPrize: Wrong prize token";
pub const ERR_PRIZE_EXCEEDED: &str = "CLDAuction.FundPrize: Prize token total exceeded";

pub const ERR_INVALID_DURATION: &str = "Auction duration must be positive";
pub const ERR_INVALID_TOKEN: &str = "Invalid prize token identifier";
pub const ERR_INVALID_PRIZE_TOTAL: &str = "Prize token total must be positive";
pub const ERR_INVALID_RETIREE_FEE: &str = "Retiree fee must be below 10000 basis points";
