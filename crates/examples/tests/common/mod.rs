#![allow(dead_code)]

use examples::Address;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn to_address(hex: &str) -> Address {
    Address::parse(hex).expect("Hex string must be exactly 40 hex characters")
}
