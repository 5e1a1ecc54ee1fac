//! This module implements the prover index as [ProverIndex].

use crate::{
    linearization::quotient_chunk_size,
    permutation::{self, COLUMNS},
    verifier_index::VerifierIndex,
    SetupError,
};
use ark_ec::pairing::Pairing;
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Radix2EvaluationDomain as D,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use snark_circuits::{Digest, PlonkConstraintSystem};
use snark_poly_commitment::PairingSRS;
use snark_utils::serialization::SerdeAs;

/// Smallest evaluation domain we preprocess circuits over
pub const MIN_DOMAIN_SIZE: usize = 4;

/// The quotient is computed over a coset of a domain this many times larger
/// than the circuit domain.
pub const QUOTIENT_BLOWUP: usize = 8;

/// The index used by the prover
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProverIndex<E: Pairing> {
    /// Digest of the constraint system the index was generated for
    pub cs_digest: Digest,

    /// Selector polynomials, in coefficient form
    #[serde_as(as = "SerdeAs")]
    pub q_m: DensePolynomial<E::ScalarField>,
    #[serde_as(as = "SerdeAs")]
    pub q_l: DensePolynomial<E::ScalarField>,
    #[serde_as(as = "SerdeAs")]
    pub q_r: DensePolynomial<E::ScalarField>,
    #[serde_as(as = "SerdeAs")]
    pub q_o: DensePolynomial<E::ScalarField>,
    #[serde_as(as = "SerdeAs")]
    pub q_c: DensePolynomial<E::ScalarField>,

    /// Permutation polynomials `S_σ1, S_σ2, S_σ3`
    #[serde_as(as = "[SerdeAs; 3]")]
    pub sigma: [DensePolynomial<E::ScalarField>; COLUMNS],

    /// The prefix of the SRS needed to commit to this circuit's polynomials
    pub srs: PairingSRS<E>,

    pub verifier_index: VerifierIndex<E>,
}

impl<E: Pairing> ProverIndex<E> {
    /// Preprocesses `cs`: interpolates the selectors and the permutation, and
    /// commits to them with `srs`.
    ///
    /// The SRS must hold at least `n + 3` powers for a domain of size `n`.
    pub fn create(
        cs: &PlonkConstraintSystem<E::ScalarField>,
        srs: &PairingSRS<E>,
    ) -> Result<Self, SetupError> {
        if !cs.is_well_formed() {
            return Err(SetupError::MalformedConstraintSystem);
        }
        let size = std::cmp::max(cs.num_gates(), MIN_DOMAIN_SIZE);
        let domain = D::<E::ScalarField>::new(size).ok_or(SetupError::DomainTooLarge(size))?;
        let n = domain.size();
        D::<E::ScalarField>::new(QUOTIENT_BLOWUP * n)
            .ok_or(SetupError::DomainTooLarge(QUOTIENT_BLOWUP * n))?;

        let required = quotient_chunk_size(n) + 1;
        if srs.max_poly_size() < required {
            return Err(SetupError::SrsTooSmall {
                required,
                available: srs.max_poly_size(),
            });
        }
        let srs = srs.trim(required)?;

        let interpolate = |evals: Vec<E::ScalarField>| {
            DensePolynomial::from_coefficients_vec(domain.ifft(&evals))
        };
        let selector = |f: fn(&snark_circuits::Gate<E::ScalarField>) -> E::ScalarField| {
            interpolate(cs.gates.iter().map(f).collect())
        };
        let q_m = selector(|g| g.q_m);
        let q_l = selector(|g| g.q_l);
        let q_r = selector(|g| g.q_r);
        let q_o = selector(|g| g.q_o);
        let q_c = selector(|g| g.q_c);

        let shifts = permutation::shifts();
        let wires = permutation::wire_columns(domain, &cs.gates, cs.zero_wire());
        let sigma =
            permutation::sigma_evals(domain, &wires, cs.num_wires, &shifts).map(&interpolate);

        let commit = |p: &DensePolynomial<E::ScalarField>| srs.commit_non_hiding(p);
        let verifier_index = VerifierIndex {
            domain_size: n,
            num_public: cs.num_public,
            shifts,
            q_m_comm: commit(&q_m)?,
            q_l_comm: commit(&q_l)?,
            q_r_comm: commit(&q_r)?,
            q_o_comm: commit(&q_o)?,
            q_c_comm: commit(&q_c)?,
            sigma_comm: [commit(&sigma[0])?, commit(&sigma[1])?, commit(&sigma[2])?],
            srs: srs.verifier_srs()?,
        };

        log::info!(
            "plonk index over a domain of size {} for {} gates",
            n,
            cs.num_gates()
        );
        Ok(ProverIndex {
            cs_digest: cs.digest(),
            q_m,
            q_l,
            q_r,
            q_o,
            q_c,
            sigma,
            srs,
            verifier_index,
        })
    }

    /// The index the verifier needs.
    pub fn verifier_index(&self) -> VerifierIndex<E> {
        self.verifier_index.clone()
    }

    pub fn domain_size(&self) -> usize {
        self.verifier_index.domain_size
    }

    /// Checks the shape of the index against its domain: a radix-2 domain
    /// with a quotient domain, selectors and permutation polynomials of at
    /// most `n` coefficients, and an SRS of exactly `n + 3` powers that the
    /// verifier index agrees with. Decoded indexes go through this before
    /// being used.
    pub fn is_consistent(&self) -> bool {
        let n = self.domain_size();
        let domain_ok = n >= MIN_DOMAIN_SIZE
            && D::<E::ScalarField>::new(n).is_some_and(|d| d.size() == n)
            && n.checked_mul(QUOTIENT_BLOWUP)
                .and_then(D::<E::ScalarField>::new)
                .is_some();
        if !domain_ok {
            return false;
        }
        let polys_ok = [&self.q_m, &self.q_l, &self.q_r, &self.q_o, &self.q_c]
            .into_iter()
            .chain(&self.sigma)
            .all(|p| p.coeffs.len() <= n);
        let srs_ok = self.srs.max_poly_size() == quotient_chunk_size(n) + 1
            && self
                .srs
                .verifier_srs()
                .is_ok_and(|vsrs| vsrs == self.verifier_index.srs);
        polys_ok && srs_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fr};
    use ark_ff::One;
    use snark_circuits::CircuitBuilder;

    fn make_index() -> ProverIndex<Bn254> {
        let mut builder = CircuitBuilder::<Fr>::new();
        let y = builder.public_input();
        let x = builder.secret_input();
        let x2 = builder.mul(x, x);
        builder.enforce_equal(x2, y);
        let cs = builder.build().unwrap().to_plonk();
        let mut rng = snark_utils::tests::make_test_rng(Some([3; 32]));
        let srs = PairingSRS::create(32, &mut rng).unwrap();
        ProverIndex::create(&cs, &srs).unwrap()
    }

    #[test]
    fn test_created_index_is_consistent() {
        let index = make_index();
        assert_eq!(index.domain_size(), MIN_DOMAIN_SIZE);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_oversized_polynomials_are_inconsistent() {
        let n = make_index().domain_size();

        let mut index = make_index();
        index.q_m.coeffs.resize(QUOTIENT_BLOWUP * n + 1, Fr::one());
        assert!(!index.is_consistent());

        let mut index = make_index();
        index.sigma[2].coeffs.resize(n + 1, Fr::one());
        assert!(!index.is_consistent());
    }

    #[test]
    fn test_domain_and_srs_mismatches_are_inconsistent() {
        let mut index = make_index();
        index.verifier_index.domain_size = 6;
        assert!(!index.is_consistent());

        let mut index = make_index();
        index.srs.g1.pop();
        assert!(!index.is_consistent());

        let mut index = make_index();
        index.verifier_index.srs.g2_x = index.verifier_index.srs.g2;
        assert!(!index.is_consistent());
    }
}
