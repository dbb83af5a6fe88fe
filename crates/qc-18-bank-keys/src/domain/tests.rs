//! # Keyspace Property Tests
//!
//! Properties that must hold for every address and denom, not just the
//! fixtures in each module.

use super::*;
use proptest::prelude::*;

fn address() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=MAX_ADDRESS_LEN)
}

fn denom() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9/:._-]{0,63}"
}

proptest! {
    #[test]
    fn prop_balance_key_roundtrip(addr in address(), denom in denom()) {
        let key = balance_key(&addr, &denom);
        let stripped = &key[KeyPrefix::Balances.as_bytes().len()..];

        let (parsed_addr, parsed_denom) = address_and_denom_from_balances_store(stripped).unwrap();
        prop_assert_eq!(parsed_addr, addr);
        prop_assert_eq!(parsed_denom, denom);
    }

    #[test]
    fn prop_balance_key_length(addr in address(), denom in denom()) {
        prop_assert_eq!(balance_key(&addr, &denom).len(), 2 + addr.len() + denom.len());
    }

    #[test]
    fn prop_same_length_addresses_keep_order(
        a in prop::collection::vec(any::<u8>(), 20),
        b in prop::collection::vec(any::<u8>(), 20),
    ) {
        let (pa, pb) = (account_balances_prefix(&a), account_balances_prefix(&b));
        prop_assert_eq!(a.cmp(&b), pa.cmp(&pb));
    }

    #[test]
    fn prop_denom_prefix_never_covers_other_denom(a in denom(), b in denom()) {
        prop_assume!(a != b);
        let pa = denom_address_prefix(&a);
        let pb = denom_address_prefix(&b);
        prop_assert!(!pb.starts_with(&pa));
        prop_assert!(!denom_address_key(&b, &[0x01; 20]).starts_with(&pa));
    }

    #[test]
    fn prop_denom_index_roundtrip(addr in address(), denom in denom()) {
        let key = denom_address_key(&denom, &addr);
        let scope = denom_address_prefix(&denom);
        prop_assert_eq!(address_from_denom_index_store(&key[scope.len()..]).unwrap(), addr);
    }

    #[test]
    fn prop_parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = address_and_denom_from_balances_store(&bytes);
        let _ = address_from_denom_index_store(&bytes);
    }

    #[test]
    fn prop_only_single_true_byte_is_true(bytes in prop::collection::vec(any::<u8>(), 0..4)) {
        prop_assert_eq!(is_true_b(&bytes), bytes == vec![TRUE_B]);
    }
}

#[test]
fn test_validated_inputs_never_panic_encoder() {
    let validator = KeyValidator::default();
    let addr = vec![0xEE; MAX_ADDRESS_LEN];
    assert!(validator.validate_balance_key(&addr, "uatom").is_ok());

    let key = balance_key(&addr, "uatom");
    assert!(key.len() <= validator.config().max_key_length);
}
