use ark_bn254::{Bn254, Fr as ScalarField};
use ark_ff::{One, UniformRand};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use snark_poly_commitment::{
    kzg::KZGProof,
    srs::{check_srs_consistency, PairingSRS},
    CommitmentError,
};
use snark_utils::tests::make_test_rng;

fn random_polynomial(
    len: usize,
    rng: &mut impl rand_core::RngCore,
) -> DensePolynomial<ScalarField> {
    let coeffs = (0..len).map(|_| ScalarField::rand(rng)).collect();
    DensePolynomial::from_coefficients_vec(coeffs)
}

#[test]
fn test_kzg_proof() {
    let mut rng = make_test_rng(None);
    let x = ScalarField::rand(&mut rng);
    let srs = unsafe { PairingSRS::<Bn254>::create_trusted_setup(x, 64) };
    let vsrs = srs.verifier_srs().unwrap();

    let poly = random_polynomial(63, &mut rng);
    let commitment = srs.commit_non_hiding(&poly).unwrap();
    let point = ScalarField::rand(&mut rng);

    let (value, proof) = KZGProof::create(&srs, &poly, point).unwrap();
    assert_eq!(value, poly.evaluate(&point));
    assert!(proof.verify(&vsrs, commitment, point, value));

    // wrong evaluation
    assert!(!proof.verify(&vsrs, commitment, point, value + ScalarField::one()));
    // wrong point
    assert!(!proof.verify(&vsrs, commitment, point + ScalarField::one(), value));
}

#[test]
fn test_commit_rejects_large_polynomial() {
    let mut rng = make_test_rng(None);
    let srs = PairingSRS::<Bn254>::create(8, &mut rng).unwrap();
    let poly = random_polynomial(9, &mut rng);
    assert_eq!(
        srs.commit_non_hiding(&poly),
        Err(CommitmentError::PolynomialTooLarge(9, 8))
    );
}

#[test]
fn test_srs_is_consistent() {
    let mut rng = make_test_rng(None);
    let srs = PairingSRS::<Bn254>::create(16, &mut rng).unwrap();
    let r = ScalarField::rand(&mut rng);
    assert!(check_srs_consistency(&srs, r));

    let mut broken = srs.clone();
    broken.g1.swap(2, 3);
    assert!(!check_srs_consistency(&broken, r));

    let vsrs = srs.verifier_srs().unwrap();
    assert!(vsrs.is_consistent_with(srs.g1[1]));
    assert!(!vsrs.is_consistent_with(srs.g1[2]));
}

#[test]
fn test_trim_keeps_prefix() {
    let mut rng = make_test_rng(None);
    let srs = PairingSRS::<Bn254>::create(16, &mut rng).unwrap();
    let trimmed = srs.trim(5).unwrap();
    assert_eq!(trimmed.max_poly_size(), 5);
    assert_eq!(trimmed.g1[..], srs.g1[..5]);
    assert_eq!(trimmed.g2_x, srs.g2_x);
    assert_eq!(srs.trim(17), Err(CommitmentError::SrsTooSmall(17, 16)));
}

#[test]
fn test_srs_serde_roundtrip() {
    let mut rng = make_test_rng(None);
    let srs = PairingSRS::<Bn254>::create(4, &mut rng).unwrap();
    let bytes = rmp_serde::to_vec(&srs).unwrap();
    let decoded: PairingSRS<Bn254> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(srs, decoded);
}
