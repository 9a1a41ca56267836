//! Integration tests for aliases and ids

use proptest::prelude::*;
use schemata_foundation::{Alias, CstId, CstType, SchemaId};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_every_prefix() {
    for cst_type in CstType::ALL {
        let text = format!("{}7", cst_type.prefix());
        let alias = Alias::parse(&text).unwrap();
        assert_eq!(alias.cst_type(), Some(cst_type));
        assert_eq!(alias.index(), Some(7));
    }
}

#[test]
fn parse_rejects_malformed_text() {
    for text in ["", "X", "X0", "x1", "Q1", "X1a", "1X", "X-1", "R1"] {
        assert!(Alias::parse(text).is_err(), "{text:?} should be rejected");
    }
}

#[test]
fn unchecked_alias_keeps_text() {
    let alias = Alias::new_unchecked("legacy");
    assert_eq!(alias.as_str(), "legacy");
    assert_eq!(alias.cst_type(), None);
    assert_eq!(alias.index(), None);
}

#[test]
fn from_parts_matches_parse() {
    let built = Alias::from_parts(CstType::Function, 12);
    assert_eq!(built, Alias::parse("F12").unwrap());
    assert_eq!(built.to_string(), "F12");
}

#[test]
fn ids_display_their_number() {
    assert_eq!(CstId::new(42).to_string(), "42");
    assert_eq!(CstId::from(7).get(), 7);
    assert_eq!(SchemaId(3).to_string(), "schema 3");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn valid_aliases_round_trip(type_index in 0usize..9, index in 1u32..100_000) {
        let cst_type = CstType::ALL[type_index];
        let text = format!("{}{index}", cst_type.prefix());
        let alias: Alias = text.parse().unwrap();
        prop_assert_eq!(alias.as_str(), text.as_str());
        prop_assert_eq!(alias.cst_type(), Some(cst_type));
        prop_assert_eq!(alias.index(), Some(index));
    }

    #[test]
    fn is_valid_agrees_with_parse(text in "[A-Z]?[0-9]{0,4}") {
        prop_assert_eq!(Alias::is_valid(&text), Alias::parse(&text).is_ok());
    }
}
