//! Tests for serde serialization/deserialization.
//!
//! These verify that an encoded bitmap survives a round trip with its
//! identity and query behavior intact.

#![cfg(feature = "serde")]

use tebmap::{BitBuffer, Config, Teb};

// ============================================================================
// Teb round trips
// ============================================================================

#[test]
fn test_uniform_teb() {
    for words in [[0u32], [0xFFu32]] {
        let teb = Teb::from_words(&words, 8).unwrap();
        let json = serde_json::to_string(&teb).unwrap();
        let restored: Teb = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, teb);
        assert_eq!(restored.size(), 8);
        assert_eq!(restored.to_bitmap(), teb.to_bitmap());
    }
}

#[test]
fn test_mixed_teb_queries_survive() {
    let words = [0xDEAD_BEEFu32, 0x0000_F00D];
    let teb = Teb::from_words(&words, 64).unwrap();

    let json = serde_json::to_string(&teb).unwrap();
    let restored: Teb = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, teb);
    for p in 0..64 {
        assert_eq!(restored.test(p), teb.test(p), "test({})", p);
    }

    // The rank directory travels along; iteration works immediately.
    let mut expected = teb.iter();
    let mut actual = restored.iter();
    while !(expected.end() || actual.end()) {
        assert_eq!((actual.pos(), actual.length()), (expected.pos(), expected.length()));
        expected.next();
        actual.next();
    }
    assert!(expected.end() && actual.end());
}

#[test]
fn test_lossy_teb() {
    let config = Config {
        fpr: 0.25,
        ..Config::default()
    };
    let teb = Teb::with_config(&[0x8000_0001], 32, config).unwrap();

    let json = serde_json::to_string(&teb).unwrap();
    let restored: Teb = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, teb);
    assert_eq!(restored.fpr(), teb.fpr());
    assert_eq!(restored.to_bitmap(), teb.to_bitmap());
}

#[test]
fn test_untrimmed_teb() {
    let config = Config {
        opt_level: 0,
        ..Config::default()
    };
    let teb = Teb::with_config(&[0b1010_0110], 8, config).unwrap();

    let json = serde_json::to_string(&teb).unwrap();
    let restored: Teb = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, teb);
    assert_eq!(restored.implicit_inner_count(), 0);
    assert_eq!(restored.implicit_leaf_count(), 0);
}

// ============================================================================
// BitBuffer round trips
// ============================================================================

#[test]
fn test_empty_bitbuffer() {
    let buf = BitBuffer::new();
    let json = serde_json::to_string(&buf).unwrap();
    let restored: BitBuffer = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 0);
    assert_eq!(restored, buf);
}

#[test]
fn test_partial_word_bitbuffer() {
    let buf = BitBuffer::from_words(vec![u32::MAX], 19);
    let json = serde_json::to_string(&buf).unwrap();
    let restored: BitBuffer = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 19);
    assert_eq!(restored.count_ones(), 19);
    assert_eq!(restored, buf);
}

// ============================================================================
// Config round trips
// ============================================================================

#[test]
fn test_config() {
    let config = Config {
        fpr: 0.125,
        opt_level: 1,
        decompress_step_limit: 50,
    };
    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.fpr, 0.125);
    assert_eq!(restored.opt_level, 1);
    assert_eq!(restored.decompress_step_limit, 50);
}
