//! Randomized round trips, cross-checked against `base_x` using the same
//! digit ordering.

use radix_rs::alphabet::DIGITS;
use radix_rs::{decode, encode, Base, Converter};
use rand::{thread_rng, Rng};
use std::str;

const ROUNDS: usize = 200;

fn random_bytes<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

// Minimal big-endian form, zero as a single 0x00
fn minimal(input: &[u8]) -> Vec<u8> {
    let trimmed: Vec<u8> = input.iter().cloned().skip_while(|&b| b == 0).collect();
    if trimmed.is_empty() {
        vec![0]
    } else {
        trimmed
    }
}

fn alphabet(base: u32) -> &'static str {
    str::from_utf8(&DIGITS[..base as usize]).unwrap()
}

#[test]
fn test_round_trip_all_bases() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let input = random_bytes(&mut rng, 48);
        let base = rng.gen_range(Base::MIN..=Base::MAX);
        let encoded = encode(&input, base).unwrap();
        assert_eq!(
            minimal(&input),
            decode(&encoded, base).unwrap(),
            "base {} input {:x?}",
            base,
            input
        );
    }
}

#[test]
fn test_round_trip_with_leading_zero_bytes() {
    let mut rng = thread_rng();
    for base in Base::MIN..=Base::MAX {
        let mut input = vec![0u8; rng.gen_range(1..4)];
        input.extend(random_bytes(&mut rng, 16));
        let converter = Converter::new(base).unwrap();
        assert_eq!(minimal(&input), converter.decode(converter.encode(&input)).unwrap());
    }
}

#[test]
fn test_upper_case_input_below_base_37() {
    let mut rng = thread_rng();
    for base in 11..=36 {
        let input = random_bytes(&mut rng, 24);
        let encoded = encode(&input, base).unwrap().to_uppercase();
        assert_eq!(minimal(&input), decode(&encoded, base).unwrap());
    }
}

#[test]
fn test_matches_base_x() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let mut input = random_bytes(&mut rng, 40);
        if input.is_empty() {
            input.push(1);
        }
        // base_x keeps leading zero bytes as extra zero digits
        input[0] = rng.gen_range(1..=255);
        let base = rng.gen_range(Base::MIN..=Base::MAX);

        let expected = base_x::encode(alphabet(base), &input);
        assert_eq!(expected, encode(&input, base).unwrap(), "base {}", base);
        assert_eq!(input, decode(&expected, base).unwrap(), "base {}", base);
    }
}

#[test]
fn test_is_valid_agrees_with_decode() {
    let mut rng = thread_rng();
    let symbols = b"0123456789abcdefxyzABCXYZ-_ ";
    for _ in 0..ROUNDS {
        let base = rng.gen_range(Base::MIN..=Base::MAX);
        let len = rng.gen_range(0..8);
        let token: Vec<u8> = (0..len)
            .map(|_| symbols[rng.gen_range(0..symbols.len())])
            .collect();
        let converter = Converter::new(base).unwrap();
        assert_eq!(converter.is_valid(&token), converter.decode(&token).is_ok());
    }
}
