use crate::test::{default_config, setup, DURATION, ONE, REFUND_DELAY, START_TIME};
use crate::Error;
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_initialize_once() {
    let s = setup(20);
    assert!(s.client.try_initialize(
        &s.admin,
        &s.collection.address,
        &crate::test::signer_pubkey(&s.env, &s.signer_key),
        &s.treasury,
        &s.token.address,
    )
    .is_err());
}

#[test]
fn test_set_config_non_admin() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.alice,
        &(2 * ONE),
        &(ONE / 5),
        &(10 * ONE),
        &REFUND_DELAY,
        &START_TIME,
        &(START_TIME + DURATION),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_set_config_zero_start_time() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.admin,
        &(2 * ONE),
        &(ONE / 5),
        &(10 * ONE),
        &REFUND_DELAY,
        &0,
        &(START_TIME + DURATION),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidStartEndTime)));
}

#[test]
fn test_set_config_start_not_before_end() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.admin,
        &(2 * ONE),
        &(ONE / 5),
        &(10 * ONE),
        &REFUND_DELAY,
        &START_TIME,
        &START_TIME,
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidStartEndTime)));
}

#[test]
fn test_set_config_zero_start_price() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.admin,
        &0,
        &0,
        &(10 * ONE),
        &REFUND_DELAY,
        &START_TIME,
        &(START_TIME + DURATION),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidAmountInWei)));
}

#[test]
fn test_set_config_zero_spend_limit() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.admin,
        &(2 * ONE),
        &(ONE / 5),
        &0,
        &REFUND_DELAY,
        &START_TIME,
        &(START_TIME + DURATION),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidAmountInWei)));
}

#[test]
fn test_set_config_end_price_above_start_price() {
    let s = setup(20);
    let result = s.client.try_set_config(
        &s.admin,
        &ONE,
        &(2 * ONE),
        &(10 * ONE),
        &REFUND_DELAY,
        &START_TIME,
        &(START_TIME + DURATION),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidAmountInWei)));
}

#[test]
fn test_set_config_stores_schedule() {
    let s = setup(20);
    default_config(&s);

    let config = s.client.get_config();
    assert_eq!(config.start_price, 2 * ONE);
    assert_eq!(config.end_price, ONE / 5);
    assert_eq!(config.spend_limit, 10 * ONE);
    assert_eq!(config.refund_delay, REFUND_DELAY);
    assert_eq!(config.start_time, START_TIME);
    assert_eq!(config.end_time, START_TIME + DURATION);
}

#[test]
fn test_set_config_twice() {
    let s = setup(20);
    default_config(&s);

    // Different arguments make no difference: the schedule is immutable.
    let result = s.client.try_set_config(
        &s.admin,
        &(3 * ONE),
        &ONE,
        &(20 * ONE),
        &0,
        &(START_TIME + 1),
        &(START_TIME + DURATION + 1),
        &0,
    );
    assert_eq!(result, Err(Ok(Error::ConfigAlreadySet)));
}

#[test]
fn test_get_config_before_set() {
    let s = setup(20);
    assert_eq!(s.client.try_get_config(), Err(Ok(Error::ConfigNotSet)));
}

#[test]
fn test_admin_setters_reject_non_admin() {
    let s = setup(20);
    let mallory = Address::generate(&s.env);
    assert_eq!(
        s.client.try_set_treasury(&mallory, &mallory),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.client.try_set_collection(&mallory, &mallory),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.client.try_pause(&mallory),
        Err(Ok(Error::Unauthorized))
    );
}
