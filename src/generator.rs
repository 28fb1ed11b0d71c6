//! Charset building and cryptographically secure password generation.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use crate::types::GenerationOptions;

/// Generated length bounds; requested lengths are clamped into this range.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

// Unambiguous variants drop characters that read alike: I/O, i/l/o, 0/1, |.
const UPPERCASE_CLEAR: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE_CLEAR: &[u8] = b"abcdefghjkmnpqrstuvwxyz";
const DIGITS_CLEAR: &[u8] = b"23456789";
const SYMBOLS_CLEAR: &[u8] = b"!@#$%^&*()_+-=[]{};:,.<>?";

/// Assembles the character pool for generation.
///
/// Classes are appended in fixed order: uppercase, lowercase, digits,
/// symbols. `exclude_ambiguous` swaps in each class's unambiguous alphabet.
/// An all-false option set falls back to the full lowercase alphabet, so
/// the pool is never empty.
pub fn build_charset(options: &GenerationOptions) -> Vec<u8> {
    let mut pool = Vec::new();

    if options.include_uppercase {
        pool.extend_from_slice(if options.exclude_ambiguous {
            UPPERCASE_CLEAR
        } else {
            UPPERCASE
        });
    }
    if options.include_lowercase {
        pool.extend_from_slice(if options.exclude_ambiguous {
            LOWERCASE_CLEAR
        } else {
            LOWERCASE
        });
    }
    if options.include_numbers {
        pool.extend_from_slice(if options.exclude_ambiguous {
            DIGITS_CLEAR
        } else {
            DIGITS
        });
    }
    if options.include_symbols {
        pool.extend_from_slice(if options.exclude_ambiguous {
            SYMBOLS_CLEAR
        } else {
            SYMBOLS
        });
    }

    if pool.is_empty() {
        pool.extend_from_slice(LOWERCASE);
    }

    pool
}

/// Generates a random password from the built charset.
///
/// Every position is drawn independently and uniformly from the pool using
/// the operating system's CSPRNG. There is no at-least-one-per-class
/// guarantee: a class can be absent from any single output, which is the
/// intended contract (per-position uniformity, nothing more). Cannot fail:
/// the charset builder never returns an empty pool.
pub fn generate_password(options: &GenerationOptions) -> String {
    let pool = build_charset(options);
    let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);

    let mut rng = OsRng;
    let dist = Uniform::from(0..pool.len());

    (0..length).map(|_| pool[dist.sample(&mut rng)] as char).collect()
}
