//! Statistical tests of ChronoHash output quality.
//!
//! These do not prove security; ChronoHash is an unaudited design. They pin
//! the diffusion behavior both compression paths are expected to keep:
//! - strict avalanche criterion (normal mode, per output bit)
//! - single-bit and small-delta differentials
//! - collision and near-collision scans
//! - byte-frequency chi-squared
//! - null-byte and length-extension edge cases

use std::collections::HashSet;

use chronohash::{ChronoHash, Digest, Mode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bit_set(digest: &Digest, bit: usize) -> bool {
    (digest.as_bytes()[bit / 8] >> (bit % 8)) & 1 == 1
}

/// Flips every bit of the first `bytes` bytes of `base` and returns the
/// Hamming distance of each variant from the base digest.
fn single_bit_flip_distances(hasher: &ChronoHash, base: &[u8], bytes: usize) -> Vec<u32> {
    let base_digest = hasher.digest(base);
    let mut distances = Vec::new();
    for byte_pos in 0..base.len().min(bytes) {
        for bit_pos in 0..8 {
            let mut modified = base.to_vec();
            modified[byte_pos] ^= 1 << bit_pos;
            distances.push(base_digest.hamming_distance(&hasher.digest(&modified)));
        }
    }
    distances
}

fn mean(values: &[u32]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

// ═══════════════════════════════════════════════════════════════════════
// Avalanche
// ═══════════════════════════════════════════════════════════════════════

/// Each output bit flips 30-70% of the time across 160 single-bit input
/// changes.
#[test]
fn strict_avalanche_criterion_normal_mode() {
    let hasher = ChronoHash::new(Mode::Normal);
    let base = b"test message for strict avalanche criterion";
    let base_digest = hasher.digest(base);

    let mut flip_counts = [0u32; 256];
    let mut total = 0u32;
    for byte_pos in 0..20 {
        for bit_pos in 0..8 {
            let mut modified = base.to_vec();
            modified[byte_pos] ^= 1 << bit_pos;
            let digest = hasher.digest(&modified);
            for (bit, count) in flip_counts.iter_mut().enumerate() {
                if bit_set(&digest, bit) != bit_set(&base_digest, bit) {
                    *count += 1;
                }
            }
            total += 1;
        }
    }

    for (bit, &count) in flip_counts.iter().enumerate() {
        let rate = count as f64 / total as f64;
        assert!(
            rate > 0.3 && rate < 0.7,
            "bit {} flip rate {:.1}% outside [30%, 70%]",
            bit,
            rate * 100.0
        );
    }
}

#[test]
fn single_bit_flips_average_half_the_output() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let distances =
            single_bit_flip_distances(&hasher, b"test message for strict avalanche criterion", 20);
        let avg = mean(&distances);
        assert!(
            (115.0..=141.0).contains(&avg),
            "{} mode mean flip distance {:.1}",
            mode,
            avg
        );
        assert!(distances.iter().all(|&d| (90..=166).contains(&d)));
    }
}

/// Variants that each differ from a base by one bit are far apart from each
/// other too.
#[test]
fn bit_independence() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let base = b"bit independence test message";
        let mut digests = Vec::new();
        for byte_pos in 0..10 {
            for bit_pos in 0..8 {
                let mut modified = base.to_vec();
                modified[byte_pos] ^= 1 << bit_pos;
                digests.push(hasher.digest(&modified));
            }
        }

        let mut distances = Vec::new();
        for i in 0..digests.len() {
            for j in (i + 1)..digests.len() {
                distances.push(digests[i].hamming_distance(&digests[j]));
            }
        }
        let avg = mean(&distances);
        assert!(
            avg > 100.0 && avg < 156.0,
            "{} mode average pairwise distance {:.1}",
            mode,
            avg
        );
    }
}

/// Adding small deltas to single bytes changes 100-156 output bits.
#[test]
fn differential_small_deltas_normal_mode() {
    let hasher = ChronoHash::new(Mode::Normal);
    let base = b"differential cryptanalysis test base";
    let base_digest = hasher.digest(base);

    for offset in 0..20 {
        for delta in [1u8, 2, 4, 8, 16, 32, 64, 128] {
            let mut modified = base.to_vec();
            modified[offset] = modified[offset].wrapping_add(delta);
            let score = base_digest.hamming_distance(&hasher.digest(&modified));
            assert!(
                score > 100 && score < 156,
                "offset {} delta {}: {} bits differ",
                offset,
                delta,
                score
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Collisions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn collision_scan_twenty_thousand_inputs() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let mut seen = HashSet::new();
        for i in 0..20_000 {
            let digest = hasher.digest(format!("collision_test_{}", i).as_bytes());
            assert!(seen.insert(digest), "{} mode collision at {}", mode, i);
        }
    }
}

/// No pair among neighbouring inputs lands within 10 bits of each other.
#[test]
fn no_near_collisions() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let digests: Vec<Digest> = (0..1000)
            .map(|i| hasher.digest(format!("near_collision_{}", i).as_bytes()))
            .collect();

        for i in 0..digests.len() {
            for j in (i + 1)..digests.len().min(i + 50) {
                let distance = digests[i].hamming_distance(&digests[j]);
                assert!(distance > 10, "{} mode: {} and {} differ by {} bits", mode, i, j, distance);
            }
        }
    }
}

#[test]
fn preimage_search_finds_nothing() {
    let hasher = ChronoHash::new(Mode::Normal);
    let target = hasher.digest(b"preimage resistance test target");
    for i in 0..10_000 {
        let attempt = format!("random_attempt_{}", i);
        assert_ne!(hasher.digest(attempt.as_bytes()), target);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Distribution
// ═══════════════════════════════════════════════════════════════════════

/// Byte frequencies over 32,000 output bytes stay under chi-squared 350
/// (255 degrees of freedom).
#[test]
fn byte_distribution_chi_squared_normal_mode() {
    let hasher = ChronoHash::new(Mode::Normal);
    let mut counts = [0u32; 256];
    for i in 0..1000 {
        let digest = hasher.digest(format!("randomness_test_{}", i).as_bytes());
        for &byte in digest.as_bytes() {
            counts[byte as usize] += 1;
        }
    }

    let expected = 32_000.0 / 256.0;
    let chi_squared: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi_squared < 350.0, "chi-squared {:.2}", chi_squared);
}

#[test]
fn output_bits_are_balanced() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let ones: u32 = (0..1000)
            .map(|i| {
                hasher
                    .digest(format!("balance_{}", i).as_bytes())
                    .as_bytes()
                    .iter()
                    .map(|b| b.count_ones())
                    .sum::<u32>()
            })
            .sum();
        let fraction = ones as f64 / 256_000.0;
        assert!((0.48..=0.52).contains(&fraction), "{} mode ones {:.4}", mode, fraction);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Edge cases
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn null_bytes_are_significant() {
    let hasher = ChronoHash::new(Mode::Normal);
    let cases: [&[u8]; 7] = [
        b"",
        b"\x00",
        b"\x00\x00",
        b"\x00\x00\x00\x00\x00",
        b"test\x00message",
        b"\x00test",
        b"test\x00",
    ];
    let digests: HashSet<Digest> = cases.iter().map(|m| hasher.digest(m)).collect();
    assert_eq!(digests.len(), cases.len());
}

#[test]
fn appended_data_changes_most_bits() {
    for mode in [Mode::Normal, Mode::Fast] {
        let hasher = ChronoHash::new(mode);
        let distance = hasher
            .digest(b"message")
            .hamming_distance(&hasher.digest(b"messageextension"));
        assert!(distance > 100, "{} mode: only {} bits differ", mode, distance);
    }
}

/// Seeded random inputs of many lengths hash deterministically and
/// without collisions.
#[test]
fn high_entropy_inputs() {
    let hasher = ChronoHash::new(Mode::Normal);
    let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let length = rng.gen_range(1..=1000);
        let mut message = vec![0u8; length];
        rng.fill(&mut message[..]);
        let digest = hasher.digest(&message);
        assert_eq!(digest, hasher.digest(&message));
        assert!(seen.insert(digest));
    }
}
