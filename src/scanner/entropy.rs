//! Shannon-entropy plausibility filtering.
//!
//! A matched value's character distribution says a lot about whether it is
//! a real credential or a false positive with the right shape: repetitive
//! strings sit too low, random blobs outside a category's typical texture
//! sit too high. A fixed, small set of categories carries an inclusive
//! [min, max] bits-per-character band; everything else passes through
//! unconditionally.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Inclusive bits-per-character range a matched value must fall within to
/// be considered plausible for its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyBand {
    pub min_bits: f64,
    pub max_bits: f64,
}

impl EntropyBand {
    pub fn contains(&self, bits: f64) -> bool {
        self.min_bits <= bits && bits <= self.max_bits
    }
}

lazy_static! {
    /// Tuned constants, bound to literal category names from the built-in
    /// catalog (patterns.rs). Renaming a category there requires updating
    /// this table in the same change.
    static ref ENTROPY_BANDS: HashMap<&'static str, EntropyBand> = HashMap::from([
        ("Possible_Creds", EntropyBand { min_bits: 1.30, max_bits: 4.73 }),
        ("phone", EntropyBand { min_bits: 1.24, max_bits: 3.28 }),
        ("id_card", EntropyBand { min_bits: 1.88, max_bits: 3.39 }),
        ("generic_card_regex", EntropyBand { min_bits: 1.28, max_bits: 3.30 }),
    ]);
}

/// The band for a category, if it has one.
pub fn band_for(category: &str) -> Option<EntropyBand> {
    ENTROPY_BANDS.get(category).copied()
}

/// Shannon entropy of the text in bits per character, computed over the
/// character frequency distribution. Empty text has entropy 0.
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    let len = len as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Whether a matched value is plausible for its category. Categories
/// without a band always pass.
pub fn within_band(category: &str, text: &str) -> bool {
    match band_for(category) {
        Some(band) => band.contains(shannon_entropy(text)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_zero_entropy() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn repeated_character_has_zero_entropy() {
        assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
    }

    #[test]
    fn two_distinct_uniform_characters_give_one_bit() {
        assert_eq!(shannon_entropy("ab"), 1.0);
    }

    #[test]
    fn entropy_is_invariant_under_permutation() {
        let original = "Tr0ub4dor&3";
        let shuffled = "3&rod4bu0rT";
        assert!((shannon_entropy(original) - shannon_entropy(shuffled)).abs() < 1e-12);
    }

    #[test]
    fn plausible_credential_sits_inside_its_band() {
        let bits = shannon_entropy("Tr0ub4dor&3");
        let band = band_for("Possible_Creds").unwrap();
        assert!(band.contains(bits), "{} outside [{}, {}]", bits, band.min_bits, band.max_bits);
    }

    #[test]
    fn repetitive_credential_is_rejected() {
        assert!(!within_band("Possible_Creds", "aaaaaaaaaa"));
    }

    #[test]
    fn unbanded_categories_always_pass() {
        assert!(within_band("google_api", "aaaaaaaa"));
        assert!(within_band("never_heard_of_it", ""));
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let band = EntropyBand { min_bits: 1.0, max_bits: 2.0 };
        assert!(band.contains(1.0));
        assert!(band.contains(2.0));
        assert!(!band.contains(0.999));
        assert!(!band.contains(2.001));
    }

    #[test]
    fn banded_categories_match_the_catalog() {
        for name in ["Possible_Creds", "phone", "id_card", "generic_card_regex"] {
            assert!(band_for(name).is_some());
        }
        assert!(band_for("amazon_aws_access_key_id").is_none());
    }
}
