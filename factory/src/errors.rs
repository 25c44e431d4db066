pub const ERR_UNAUTHORIZED: &str = "This can only be done by the DAO";
pub const ERR_INVALID_TOKEN: &str = "Invalid prize token identifier";
pub const ERR_INVALID_TEMPLATE: &str = "Auction template must be a deployed contract";
pub const ERR_NO_SUCH_AUCTION: &str = "CLDAuctionFactory.SeeAuctionData: No auction at this index";
