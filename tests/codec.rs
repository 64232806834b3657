use bch15::bch::sampling::{error_mask, masks_of_weight};
use bch15::{Bch15, BchError, BchParams, ConfigError, Uncorrectable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn codec() -> &'static Bch15 {
    Bch15::standard()
}

#[test]
fn self_test_scenario() {
    let c = codec();
    let encoded = c.encode_shifted(0x5c00).unwrap();
    assert_eq!(encoded, 0x5c29);
    assert_eq!(c.encode(0x17).unwrap(), encoded);

    let decoded = c.decode(encoded ^ 0x34).unwrap();
    assert_eq!(decoded.corrected, encoded);
    assert_eq!(decoded.errors_found, 3);
    assert_eq!(decoded.offsets, vec![2, 4, 5]);
    assert!(!decoded.is_uncorrectable());
    assert_eq!(c.decode_message(encoded ^ 0x34), Ok(0x17));
}

#[test]
fn dimensions() {
    let c = codec();
    assert_eq!(c.parity_bits(), 10);
    assert_eq!(c.message_bits(), 5);
    assert_eq!(c.params(), &BchParams::default());
}

#[test]
fn zero_message() {
    let c = codec();
    assert_eq!(c.encode(0).unwrap(), 0);
    let decoded = c.decode(0).unwrap();
    assert_eq!(decoded.corrected, 0);
    assert_eq!(decoded.errors_found, 0);
    assert!(decoded.failure.is_none());
}

#[test]
fn encode_is_deterministic_and_systematic() {
    let c = codec();
    for m in 0u16..32 {
        let cw = c.encode(m).unwrap();
        assert_eq!(cw, c.encode(m).unwrap());
        assert_eq!(c.message_of(cw), m);
        assert!(c.is_codeword(cw), "m={m}");
    }
    assert_eq!(c.encode(1).unwrap(), 0x537);
    assert_eq!(c.encode(31).unwrap(), 0x7fff);
}

#[test]
fn roundtrip_without_errors() {
    let c = codec();
    for m in 0u16..32 {
        let cw = c.encode(m).unwrap();
        let decoded = c.decode(cw).unwrap();
        assert_eq!(decoded.corrected, cw);
        assert_eq!(decoded.errors_found, 0);
        assert_eq!(c.decode_message(cw), Ok(m));
    }
}

#[test]
fn corrects_every_pattern_up_to_three_errors() {
    let c = codec();
    for m in 0u16..32 {
        let cw = c.encode(m).unwrap();
        for weight in 1..=3 {
            for mask in masks_of_weight(weight) {
                let decoded = c.decode(cw ^ mask).unwrap();
                assert_eq!(
                    decoded.corrected, cw,
                    "m={m}, mask={mask:#06x}: {:?}", decoded.failure
                );
                assert!(!decoded.is_uncorrectable());
                assert_eq!(decoded.errors_found, weight as usize);
            }
        }
    }
}

#[test]
fn four_or_more_errors_never_return_the_sent_codeword() {
    let c = codec();
    let cw = c.encode(0x17).unwrap();
    let mut flagged = 0usize;
    for weight in 4..=6 {
        for mask in masks_of_weight(weight) {
            let decoded = c.decode(cw ^ mask).unwrap();
            // minimum distance is 7
            assert_ne!(decoded.corrected, cw, "mask={mask:#06x}");
            if decoded.is_uncorrectable() {
                assert_eq!(decoded.corrected, cw ^ mask);
                assert_eq!(decoded.errors_found, 0);
                assert!(decoded.offsets.is_empty());
                flagged += 1;
            }
        }
    }
    assert!(flagged > 0);
}

#[test]
fn accepted_words_are_always_codewords() {
    let c = codec();
    let mut accepted = 0usize;
    for received in 0u16..(1 << 15) {
        let decoded = c.decode(received).unwrap();
        if decoded.is_uncorrectable() {
            continue;
        }
        accepted += 1;
        assert!(c.is_codeword(decoded.corrected), "received={received:#06x}");
        assert!((decoded.corrected ^ received).count_ones() <= 3);
        assert_eq!((decoded.corrected ^ received).count_ones() as usize, decoded.errors_found);
    }
    // 32 codewords, each with 1 + 15 + 105 + 455 words within distance 3
    assert_eq!(accepted, 32 * 576);
}

#[test]
fn uncorrectable_reasons_surface() {
    let c = codec();
    assert_eq!(c.decode(0x1d).unwrap().failure, Some(Uncorrectable::LocatorLeadingZero));
    assert_eq!(
        c.decode_message(0x0f),
        Err(BchError::Uncorrectable(Uncorrectable::RootCountMismatch { expected: 3, found: 0 }))
    );
}

#[test]
fn random_patterns() {
    let c = codec();
    let mut rng = StdRng::seed_from_u64(0x5c00);
    for _ in 0..2000 {
        let m = rng.gen_range(0..32u16);
        let weight = rng.gen_range(0..=3usize);
        let mask = error_mask(&mut rng, weight);
        assert_eq!(mask.count_ones() as usize, weight);
        let cw = c.encode(m).unwrap();
        assert_eq!(c.decode_message(cw ^ mask), Ok(m), "m={m}, mask={mask:#06x}");
    }
}

#[test]
fn rejects_out_of_range_inputs() {
    let c = codec();
    assert_eq!(c.encode(32), Err(BchError::MessageTooWide { message: 32, bits: 5 }));
    assert!(matches!(c.encode_shifted(0x5c01), Err(BchError::MessageTooWide { .. })));
    assert!(matches!(c.encode_shifted(0x8000), Err(BchError::MessageTooWide { .. })));
    assert_eq!(c.decode(0x8000), Err(BchError::WordTooWide(0x8000)));
    assert!(!c.is_codeword(0x8000));
}

#[test]
fn new_is_idempotent_and_matches_standard() {
    let a = Bch15::new(BchParams::bch_15_5()).unwrap();
    let b = Bch15::new(BchParams::bch_15_5()).unwrap();
    assert_eq!(a, b);
    assert_eq!(&a, Bch15::standard());
}

#[test]
fn other_parameter_sets() {
    for (params, k) in [
        (BchParams::hamming_15_11(), 11),
        (BchParams::bch_15_7(), 7),
        (BchParams::new(0x19, 0x2, 3), 5),
        (BchParams::new(0x13, 0x4, 3), 5),
    ] {
        let c = Bch15::new(params).unwrap();
        assert_eq!(c.message_bits(), k, "{params:?}");
        for m in 0u16..(1 << k) {
            let cw = c.encode(m).unwrap();
            for weight in 0..=params.max_errors as u32 {
                for mask in masks_of_weight(weight).step_by(7) {
                    let decoded = c.decode(cw ^ mask).unwrap();
                    assert_eq!(decoded.corrected, cw, "{params:?} m={m} mask={mask:#06x}");
                }
            }
        }
    }
}

#[test]
fn invalid_parameters() {
    assert_eq!(Bch15::new(BchParams::new(0x13, 0x2, 0)), Err(ConfigError::MaxErrors(0)));
    assert_eq!(Bch15::new(BchParams::new(0x13, 0x2, 4)), Err(ConfigError::MaxErrors(4)));
    assert_eq!(
        Bch15::new(BchParams::new(0x1f, 0x2, 3)),
        Err(ConfigError::NotPrimitive { primitive: 0x2, modulus: 0x1f })
    );
    assert_eq!(
        Bch15::new(BchParams::new(0x07, 0x2, 3)),
        Err(ConfigError::ModulusDegree { modulus: 0x07 })
    );
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = (0..4u16)
        .map(|t| {
            std::thread::spawn(move || {
                let c = Bch15::standard();
                (0..32u16).all(|m| {
                    let cw = c.encode(m).unwrap();
                    c.decode(cw ^ (1 << t)).unwrap().corrected == cw
                })
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn mask_past_bit_14_is_an_input_error() {
    let c = codec();
    let sent = c.encode_shifted(0x5c00).unwrap();
    assert_eq!(c.decode(sent ^ 0x8000), Err(BchError::WordTooWide(0xdc29)));
    assert!(matches!(c.decode_message(sent ^ 0xffff), Err(BchError::WordTooWide(_))));
}
