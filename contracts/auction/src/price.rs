use crate::types::AuctionConfig;

/// Unit price at `now`, linearly decaying from `start_price` at
/// `start_time` to `end_price` at `end_time`. Clamped to `start_price`
/// before the window and to `end_price` (the clearing price) after it.
///
/// Truncating division shrinks the subtracted discount, so the result
/// never rounds below the true curve — rounding favors the seller.
pub fn current_price(config: &AuctionConfig, now: u64) -> i128 {
    if now <= config.start_time {
        return config.start_price;
    }
    if now >= config.end_time {
        return config.end_price;
    }
    let elapsed = (now - config.start_time) as i128;
    let duration = (config.end_time - config.start_time) as i128;
    let discount = (config.start_price - config.end_price) * elapsed / duration;
    config.start_price - discount
}

/// Quantity of a participant's purchased tokens that has vested by `now`.
/// Ramps linearly over `vesting_duration` seconds from `start_time`;
/// monotonically non-decreasing and bounded by `purchased`.
pub fn vested_quantity(config: &AuctionConfig, purchased: u32, now: u64) -> u32 {
    if config.vesting_duration == 0 {
        return purchased;
    }
    if now <= config.start_time {
        return 0;
    }
    let elapsed = now - config.start_time;
    if elapsed >= config.vesting_duration {
        return purchased;
    }
    ((purchased as u64 * elapsed) / config.vesting_duration) as u32
}
