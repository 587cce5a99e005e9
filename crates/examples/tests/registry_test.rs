mod common;

use common::{init_logger, to_address};
use examples::{Account, Address, Registry};
use once_cell::sync::Lazy;
use option::O;

static ALICE: Lazy<Address> = Lazy::new(|| to_address("d5a3c7f85d2b6e91fa78cd3210b45f6ae913d0d0"));
static BOB: Lazy<Address> = Lazy::new(|| to_address("0x1111111111111111111111111111111111111111"));
static CAROL: Lazy<Address> = Lazy::new(|| to_address("2222222222222222222222222222222222222222"));

#[derive(Debug)]
pub struct TransferCase {
    pub name: &'static str,
    pub alice_start: u64,
    pub amount: u64,
    pub expected_success: bool,
    pub alice_end: u64,
    pub bob_end: u64,
}

pub static TRANSFER_CASES: Lazy<Vec<TransferCase>> = Lazy::new(|| {
    vec![
        TransferCase {
            name: "partial transfer",
            alice_start: 100,
            amount: 42,
            expected_success: true,
            alice_end: 58,
            bob_end: 42,
        },
        TransferCase {
            name: "exact balance",
            alice_start: 10,
            amount: 10,
            expected_success: true,
            alice_end: 0,
            bob_end: 10,
        },
        TransferCase {
            name: "insufficient funds",
            alice_start: 5,
            amount: 6,
            expected_success: false,
            alice_end: 5,
            bob_end: 0,
        },
        TransferCase {
            name: "zero amount",
            alice_start: 0,
            amount: 0,
            expected_success: true,
            alice_end: 0,
            bob_end: 0,
        },
    ]
});

fn registry_with(alice: u64) -> Registry {
    let mut registry = Registry::new();
    registry.open(*ALICE);
    registry.open(*BOB);
    if alice > 0 {
        registry.deposit(*ALICE, alice).expect("deposit");
    }
    registry
}

#[test]
fn test_transfer_cases() {
    init_logger();
    println!("=== Testing Registry: transfers ===");
    for case in TRANSFER_CASES.iter() {
        println!("Case: {}", case.name);
        let mut registry = registry_with(case.alice_start);

        let result = registry.transfer(*ALICE, *BOB, case.amount);
        assert_eq!(result.is_ok(), case.expected_success, "{}", case.name);
        assert_eq!(registry.balance(&ALICE), O::Some(case.alice_end), "{}", case.name);
        assert_eq!(registry.balance(&BOB), O::Some(case.bob_end), "{}", case.name);
    }
    println!("✓ {} transfer cases passed", TRANSFER_CASES.len());
}

#[test]
fn test_open_is_idempotent() {
    init_logger();
    let mut registry = Registry::new();
    registry.open(*ALICE).balance = 7;

    let again = registry.open(*ALICE);
    assert_eq!(*again, Account { balance: 7 });
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_balance_of_unknown_address_is_none() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.balance(&ALICE), O::None);
    assert!(registry.account(&ALICE).is_none());
}

#[test]
fn test_deposit_requires_open_account() {
    init_logger();
    let mut registry = Registry::new();
    let err = registry.deposit(*CAROL, 1).unwrap_err();
    assert!(err.to_string().contains("Unknown account"));
}

#[test]
fn test_deposit_overflow_leaves_balance() {
    let mut registry = registry_with(u64::MAX);
    let err = registry.deposit(*ALICE, 1).unwrap_err();
    assert!(err.to_string().contains("overflow"));
    assert_eq!(registry.balance(&ALICE), O::Some(u64::MAX));
}

#[test]
fn test_transfer_to_unknown_recipient_changes_nothing() {
    let mut registry = registry_with(50);
    let err = registry.transfer(*ALICE, *CAROL, 10).unwrap_err();
    assert!(err.to_string().contains("Unknown recipient"));
    assert_eq!(registry.balance(&ALICE), O::Some(50));
}

#[test]
fn test_transfer_overflow_is_atomic() {
    let mut registry = registry_with(10);
    registry.deposit(*BOB, u64::MAX).expect("deposit");
    assert!(registry.transfer(*ALICE, *BOB, 1).is_err());
    assert_eq!(registry.balance(&ALICE), O::Some(10));
    assert_eq!(registry.balance(&BOB), O::Some(u64::MAX));
}

#[test]
fn test_self_transfer_keeps_balance() {
    let mut registry = registry_with(10);
    registry.transfer(*ALICE, *ALICE, 10).expect("self transfer");
    assert_eq!(registry.balance(&ALICE), O::Some(10));
}

#[test]
fn test_last_touched_tracks_mutations() {
    println!("=== Testing Registry: last touched cursor ===");
    let mut registry = Registry::new();
    assert_eq!(registry.last_touched(), O::None);

    registry.open(*ALICE);
    assert_eq!(registry.last_touched(), O::Some(*ALICE));

    registry.open(*BOB);
    registry.deposit(*BOB, 3).expect("deposit");
    assert_eq!(registry.last_touched(), O::Some(*BOB));

    // A failed deposit does not move the cursor.
    assert!(registry.deposit(*CAROL, 3).is_err());
    assert_eq!(registry.last_touched(), O::Some(*BOB));

    assert_eq!(registry.clear_last_touched(), O::Some(*BOB));
    assert_eq!(registry.last_touched(), O::None);
    println!("✓ Cursor follows successful mutations only");
}

#[test]
fn test_close_moves_account_out() {
    init_logger();
    let mut registry = registry_with(25);

    let closed = registry.close(&ALICE);
    assert_eq!(closed, O::Some(Account { balance: 25 }));
    assert_eq!(registry.balance(&ALICE), O::None);
    assert_eq!(registry.len(), 1);

    // Closing again yields nothing.
    assert_eq!(registry.close(&ALICE), O::None);
}

#[test]
fn test_close_clears_cursor_only_for_that_address() {
    let mut registry = Registry::new();
    registry.open(*ALICE);
    registry.open(*BOB);

    registry.close(&ALICE);
    assert_eq!(registry.last_touched(), O::Some(*BOB));

    registry.close(&BOB);
    assert_eq!(registry.last_touched(), O::None);
}
