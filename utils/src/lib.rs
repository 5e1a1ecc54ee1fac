//! Utilities shared by the crates of the proving engine: helpers extending
//! [arkworks](http://arkworks.rs/) field, polynomial, domain and curve types,
//! and [serde] adapters for arkworks values.

pub mod dense_polynomial;
pub mod fast_msm;
pub mod field_helpers;
pub mod radix2evaluation_domain;
pub mod serialization;

pub use dense_polynomial::ExtendedDensePolynomial;
pub use field_helpers::{FieldHelpers, FieldHelpersError};

pub mod tests {
    //! Helpers for writing reproducible randomized tests.

    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Create a new test RNG with a random seed, or the given one.
    /// The seed is printed so that failing runs can be replayed.
    pub fn make_test_rng(seed: Option<[u8; 32]>) -> StdRng {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        eprintln!("Using seed {}", hex::encode(seed));
        StdRng::from_seed(seed)
    }
}
