//! Integration tests for primefactor-core.
//!
//! These tests exercise the public entry points end to end:
//! parse → factor → verify product, primality and ordering.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive};
use rand::Rng;

use primefactor_core::{
    CollectSink, FactorError, FactorList, NoopSink, factor, factor_with, find_factor, parse_number,
};

/// Trial-division primality check used to audit engine output.
fn is_prime(p: &BigUint) -> bool {
    let Some(p) = p.to_u64() else {
        // Outputs above 64 bits never occur in these tests.
        panic!("unexpected factor above u64: {p}");
    };
    if p < 2 {
        return false;
    }
    let mut d = 2u64;
    while u128::from(d) * u128::from(d) <= u128::from(p) {
        if p % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn assert_valid_factorization(n: &BigInt, factors: &FactorList) {
    assert_eq!(
        BigInt::from(factors.product()),
        *n,
        "product of {factors} does not equal {n}"
    );
    assert!(
        factors.as_slice().windows(2).all(|w| w[0] <= w[1]),
        "factors of {n} not sorted: {factors}"
    );
    for f in factors {
        assert!(is_prime(f), "factor {f} of {n} is not prime");
    }
}

#[test]
fn concrete_scenarios() {
    let cases = [
        ("1", ""),
        ("2", "2"),
        ("97", "97"),
        ("100", "2 * 2 * 5 * 5"),
        ("9223372036854775807", "7 * 7 * 73 * 127 * 337 * 92737 * 649657"),
    ];
    for (input, expected) in cases {
        let n = parse_number(input).unwrap();
        let factors = factor(&n, false).unwrap();
        assert_eq!(factors.joined(), expected, "factoring {input}");
    }
}

#[test]
fn large_input_with_large_prime_factor() {
    let n = parse_number("3121121111111121130").unwrap();
    let factors = factor(&n, false).unwrap();
    let expected: Vec<BigUint> = ["2", "5", "103", "3030214670981671"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(factors.as_slice(), expected.as_slice());
    assert_eq!(BigInt::from(factors.product()), n);
}

#[test]
fn random_inputs_factor_correctly() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let n = BigInt::from(rng.random_range(1u64..10_000_000));
        let factors = factor(&n, false).unwrap();
        assert_valid_factorization(&n, &factors);
    }
}

#[test]
fn random_products_of_known_primes() {
    const PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 101, 7919, 104729, 1299709];
    let mut rng = rand::rng();
    for _ in 0..50 {
        let count = rng.random_range(1..12);
        let mut picked: Vec<u64> = (0..count)
            .map(|_| PRIMES[rng.random_range(0..PRIMES.len())])
            .collect();
        picked.sort_unstable();

        let n: BigInt = picked.iter().map(|&p| BigInt::from(p)).product();
        let factors = factor(&n, false).unwrap();
        let got: Vec<u64> = factors.iter().map(|f| f.to_u64().unwrap()).collect();
        assert_eq!(got, picked, "factoring {n}");
    }
}

#[test]
fn factor_is_idempotent() {
    let n = parse_number("600851475143").unwrap();
    let first = factor(&n, false).unwrap();
    let second = factor(&n, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.joined(), "71 * 839 * 1471 * 6857");
}

#[test]
fn input_is_not_mutated() {
    let n = BigInt::from(360);
    let before = n.clone();
    let _ = factor(&n, false).unwrap();
    assert_eq!(n, before);
}

#[test]
fn zero_and_negative_fail_fast() {
    for input in ["0", "-5", "-9223372036854775808000"] {
        let n = parse_number(input).unwrap();
        match factor(&n, false) {
            Err(FactorError::InvalidInput { value }) => assert_eq!(value, n),
            other => panic!("expected InvalidInput for {input}, got {other:?}"),
        }
    }
}

#[test]
fn trace_lines_for_twelve() {
    let mut sink = CollectSink::new();
    let traced = factor_with(&BigInt::from(12), &mut sink).unwrap();
    let silent = factor_with(&BigInt::from(12), NoopSink).unwrap();
    assert_eq!(traced, silent);

    let lines = sink.lines();
    let found: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("factor found:") || l.starts_with("last factor:"))
        .collect();
    assert_eq!(found, ["factor found: 2", "factor found: 2", "last factor: 3"]);
    assert_eq!(lines.last().unwrap(), "returning factors: [2, 2, 3]");
}

#[test]
fn concurrent_calls_are_independent() {
    let inputs: Vec<u64> = (2..40).map(|i| i * 7919 + 1).collect();
    let expected: Vec<FactorList> = inputs
        .iter()
        .map(|&n| factor(&BigInt::from(n), false).unwrap())
        .collect();

    let results: Vec<FactorList> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&n| s.spawn(move || factor(&BigInt::from(n), false).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

#[test]
fn record_for_large_number() {
    let n = parse_number("9223372036854775807").unwrap();
    let record = find_factor(&n, false).unwrap();
    assert_eq!(record.number, n);
    assert_eq!(record.factors, "7 * 7 * 73 * 127 * 337 * 92737 * 649657");
    assert!(record.duration >= 0.0);
}

#[test]
fn product_of_empty_list_is_one() {
    let factors = factor(&BigInt::one(), false).unwrap();
    assert_eq!(factors.product(), BigUint::one());
}
