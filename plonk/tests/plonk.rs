use ark_bn254::{Bn254, Fr};
use ark_ff::One;
use snark_circuits::{Circuit, CircuitBuilder, LinearCombination, Variable, WitnessError};
use snark_plonk::{prove, verify, ProverError, ProverIndex, ProverProof, SetupError};
use snark_poly_commitment::PairingSRS;
use snark_utils::tests::make_test_rng;

/// `x^3 + x + 5 = y`
fn cubic() -> Circuit<Fr> {
    let mut builder = CircuitBuilder::new();
    let y = builder.public_input();
    let x = builder.secret_input();
    let x2 = builder.mul(x, x);
    let x3 = builder.mul(x2, x);
    let lhs = LinearCombination::from(x3)
        + LinearCombination::from(x)
        + LinearCombination::constant(Fr::from(5u64));
    builder.enforce_named("cubic", lhs, Variable::One, y);
    builder.build().unwrap()
}

/// `x^3 + 2x + 5 = y`
fn other_cubic() -> Circuit<Fr> {
    let mut builder = CircuitBuilder::new();
    let y = builder.public_input();
    let x = builder.secret_input();
    let x2 = builder.mul(x, x);
    let x3 = builder.mul(x2, x);
    let lhs = LinearCombination::from(x3)
        + LinearCombination::term(x, Fr::from(2u64))
        + LinearCombination::constant(Fr::from(5u64));
    builder.enforce_equal(lhs, y);
    builder.build().unwrap()
}

fn srs() -> PairingSRS<Bn254> {
    let mut rng = make_test_rng(Some([7u8; 32]));
    PairingSRS::create(64, &mut rng).unwrap()
}

#[test]
fn test_cubic_accept_and_reject() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let vi = index.verifier_index();

    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    let proof = prove(&index, &cs, &witness, &mut rng).unwrap();
    assert!(verify(&vi, &[Fr::from(35u64)], &proof));
    assert!(!verify(&vi, &[Fr::from(36u64)], &proof));
    assert!(!verify(&vi, &[], &proof));
    assert!(!verify(&vi, &[Fr::from(35u64), Fr::one()], &proof));
}

#[test]
fn test_proofs_are_randomized() {
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    let p1 = prove(&index, &cs, &witness, &mut rng).unwrap();
    let p2 = prove(&index, &cs, &witness, &mut rng).unwrap();
    assert_ne!(p1.commitments.a, p2.commitments.a);
    assert!(verify(&index.verifier_index, &[Fr::from(35u64)], &p1));
    assert!(verify(&index.verifier_index, &[Fr::from(35u64)], &p2));
}

#[test]
fn test_tampered_proofs_are_rejected() {
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let vi = index.verifier_index();
    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    let proof = prove(&index, &cs, &witness, &mut rng).unwrap();

    let mut bad_eval = proof;
    bad_eval.evals.a += Fr::one();
    assert!(!verify(&vi, &[Fr::from(35u64)], &bad_eval));

    let mut bad_z = proof;
    bad_z.evals.z_omega += Fr::one();
    assert!(!verify(&vi, &[Fr::from(35u64)], &bad_z));

    let mut swapped = proof;
    swapped.commitments.a = proof.commitments.b;
    assert!(!verify(&vi, &[Fr::from(35u64)], &swapped));

    let mut bad_opening = proof;
    bad_opening.commitments.w_zeta = proof.commitments.w_zeta_omega;
    assert!(!verify(&vi, &[Fr::from(35u64)], &bad_opening));
}

#[test]
fn test_bad_witness_is_rejected_before_proving() {
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let mut witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    witness.public[0] = Fr::from(36u64);
    assert_eq!(
        prove(&index, &cs, &witness, &mut rng),
        Err(ProverError::Witness(WitnessError::Unsatisfied {
            constraint: 2,
            label: Some("cubic".into()),
        }))
    );
}

#[test]
fn test_small_srs_is_refused() {
    let mut rng = make_test_rng(None);
    let cs = cubic().to_plonk();
    let small = PairingSRS::<Bn254>::create(4, &mut rng).unwrap();
    assert!(matches!(
        ProverIndex::create(&cs, &small),
        Err(SetupError::SrsTooSmall { available: 4, .. })
    ));
}

#[test]
fn test_malformed_index_is_refused() {
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let n = index.domain_size();

    // a selector too large for the quotient domain
    let mut oversized = index.clone();
    oversized.q_m.coeffs.resize(8 * n + 1, Fr::one());
    assert_eq!(
        prove(&oversized, &cs, &witness, &mut rng).unwrap_err(),
        ProverError::KeyMismatch
    );

    let mut short_srs = index.clone();
    short_srs.srs.g1.pop();
    assert_eq!(
        prove(&short_srs, &cs, &witness, &mut rng).unwrap_err(),
        ProverError::KeyMismatch
    );

    assert!(prove(&index, &cs, &witness, &mut rng).is_ok());
}

#[test]
fn test_cross_circuit_rejection() {
    let mut rng = make_test_rng(None);
    let srs = srs();
    let (c1, c2) = (cubic(), other_cubic());
    let (cs1, cs2) = (c1.to_plonk(), c2.to_plonk());
    let index1 = ProverIndex::create(&cs1, &srs).unwrap();
    let index2 = ProverIndex::create(&cs2, &srs).unwrap();

    let w1 = c1.solve(&[Fr::from(35u64)], &[Fr::from(3u64)]).unwrap();
    let proof = prove(&index1, &cs1, &w1, &mut rng).unwrap();
    assert!(verify(&index1.verifier_index, &[Fr::from(35u64)], &proof));
    assert!(!verify(&index2.verifier_index, &[Fr::from(35u64)], &proof));

    assert_eq!(
        prove(&index2, &cs1, &w1, &mut rng),
        Err(ProverError::KeyMismatch)
    );
}

#[test]
fn test_index_and_proof_serde_roundtrip() {
    let mut rng = make_test_rng(None);
    let circuit = cubic();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let bytes = rmp_serde::to_vec(&index).unwrap();
    let decoded: ProverIndex<Bn254> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(index, decoded);

    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();
    let proof = prove(&decoded, &cs, &witness, &mut rng).unwrap();
    let bytes = rmp_serde::to_vec(&proof).unwrap();
    let proof: ProverProof<Bn254> = rmp_serde::from_slice(&bytes).unwrap();
    assert!(verify(&index.verifier_index, &[Fr::from(35u64)], &proof));
}

#[test]
fn test_circuit_without_public_inputs() {
    let mut rng = make_test_rng(None);
    let mut builder = CircuitBuilder::<Fr>::new();
    let x = builder.secret_input();
    builder.assert_boolean(x);
    let circuit = builder.build().unwrap();
    let cs = circuit.to_plonk();
    let index = ProverIndex::create(&cs, &srs()).unwrap();
    let witness = circuit.solve(&[], &[Fr::one()]).unwrap();
    let proof = prove(&index, &cs, &witness, &mut rng).unwrap();
    assert!(verify(&index.verifier_index, &[], &proof));
}
