mod common;

use ark_bn254::{Bn254, Fr};
use ark_ff::One;
use common::{cubic, other_cubic, srs, sum_product_difference};
use proptest::prelude::*;
use snark_circuits::WitnessError;
use snark_engine::{
    compile, prove, setup, verify, ConstraintSystem, Proof, ProverError, ProvingSystem,
    SetupError, VerificationResult,
};
use snark_utils::tests::make_test_rng;

const SYSTEMS: [ProvingSystem; 2] = [ProvingSystem::Groth16, ProvingSystem::Plonk];

#[test]
fn test_cubic_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = make_test_rng(None);
    let srs = srs();
    let circuit = cubic();
    for system in SYSTEMS {
        let cs = compile::<Bn254>(&circuit, system);
        assert_eq!(cs.system(), system);
        let (pk, vk) = setup(&cs, Some(&srs), &mut rng).unwrap();
        assert_eq!(pk.verifying_key(), vk);

        let witness = circuit
            .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
            .unwrap();
        let proof = prove(&pk, &cs, &witness, &mut rng).unwrap();
        assert_eq!(proof.system(), system);
        assert_eq!(
            verify(&vk, &[Fr::from(35u64)], &proof),
            VerificationResult::Accepted
        );
        assert_eq!(
            verify(&vk, &[Fr::from(36u64)], &proof),
            VerificationResult::Rejected
        );
    }
}

#[test]
fn test_public_inputs_are_bound_in_order() {
    let mut rng = make_test_rng(None);
    let srs = srs();
    let circuit = sum_product_difference();
    let public = [8u64, 15, 2].map(Fr::from);
    for system in SYSTEMS {
        let cs = compile::<Bn254>(&circuit, system);
        assert_eq!(cs.num_public(), 3);
        let (pk, vk) = setup(&cs, Some(&srs), &mut rng).unwrap();
        let witness = circuit
            .solve(&public, &[Fr::from(5u64), Fr::from(3u64)])
            .unwrap();
        let proof = prove(&pk, &cs, &witness, &mut rng).unwrap();
        assert!(verify(&vk, &public, &proof).is_accepted());

        for reordered in [[15u64, 8, 2], [8, 2, 15], [2, 15, 8]] {
            assert_eq!(
                verify(&vk, &reordered.map(Fr::from), &proof),
                VerificationResult::Rejected,
                "{system:?} accepted public inputs {reordered:?}"
            );
        }
        assert!(!verify(&vk, &public[..2], &proof).is_accepted());
    }
}

#[test]
fn test_unsatisfied_witness_fails_with_the_constraint() {
    let mut rng = make_test_rng(None);
    let srs = srs();
    let circuit = cubic();
    for system in SYSTEMS {
        let cs = compile::<Bn254>(&circuit, system);
        let (pk, _) = setup(&cs, Some(&srs), &mut rng).unwrap();
        let mut witness = circuit
            .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
            .unwrap();
        witness.private[0] += Fr::one();
        assert!(matches!(
            prove(&pk, &cs, &witness, &mut rng),
            Err(ProverError::Witness(WitnessError::Unsatisfied { .. }))
        ));
    }
}

#[test]
fn test_cross_pairing_is_rejected() {
    let mut rng = make_test_rng(None);
    let srs = srs();
    let (c1, c2) = (cubic(), other_cubic());
    for system in SYSTEMS {
        let cs1 = compile::<Bn254>(&c1, system);
        let cs2 = compile::<Bn254>(&c2, system);
        assert_ne!(cs1.digest(), cs2.digest());
        let (pk1, _) = setup(&cs1, Some(&srs), &mut rng).unwrap();
        let (pk2, vk2) = setup(&cs2, Some(&srs), &mut rng).unwrap();

        let w1 = c1.solve(&[Fr::from(35u64)], &[Fr::from(3u64)]).unwrap();
        let proof = prove(&pk1, &cs1, &w1, &mut rng).unwrap();
        assert_eq!(
            verify(&vk2, &[Fr::from(35u64)], &proof),
            VerificationResult::Rejected
        );
        assert_eq!(
            prove(&pk2, &cs1, &w1, &mut rng),
            Err(ProverError::KeyMismatch)
        );
    }
}

#[test]
fn test_mixed_systems() {
    let mut rng = make_test_rng(None);
    let srs = srs();
    let circuit = cubic();
    let witness = circuit
        .solve(&[Fr::from(35u64)], &[Fr::from(3u64)])
        .unwrap();

    let groth16_cs = compile::<Bn254>(&circuit, ProvingSystem::Groth16);
    let plonk_cs = compile::<Bn254>(&circuit, ProvingSystem::Plonk);
    let (groth16_pk, groth16_vk) = setup(&groth16_cs, None, &mut rng).unwrap();
    let (plonk_pk, plonk_vk) = setup(&plonk_cs, Some(&srs), &mut rng).unwrap();

    assert_eq!(
        prove(&groth16_pk, &plonk_cs, &witness, &mut rng),
        Err(ProverError::SystemMismatch {
            key: ProvingSystem::Groth16,
            constraint_system: ProvingSystem::Plonk,
        })
    );

    let groth16_proof = prove(&groth16_pk, &groth16_cs, &witness, &mut rng).unwrap();
    let plonk_proof = prove(&plonk_pk, &plonk_cs, &witness, &mut rng).unwrap();
    let public = [Fr::from(35u64)];
    assert_eq!(
        verify(&plonk_vk, &public, &groth16_proof),
        VerificationResult::Rejected
    );
    assert_eq!(
        verify(&groth16_vk, &public, &plonk_proof),
        VerificationResult::Rejected
    );
}

#[test]
fn test_plonk_setup_requires_an_srs() {
    let mut rng = make_test_rng(None);
    let cs = compile::<Bn254>(&cubic(), ProvingSystem::Plonk);
    assert_eq!(setup(&cs, None, &mut rng), Err(SetupError::MissingSrs));
}

#[test]
fn test_srs_too_small() {
    let mut rng = make_test_rng(None);
    let small = snark_poly_commitment::PairingSRS::<Bn254>::create(4, &mut rng).unwrap();
    let cs = compile::<Bn254>(&cubic(), ProvingSystem::Plonk);
    assert!(matches!(
        setup(&cs, Some(&small), &mut rng),
        Err(SetupError::Plonk(snark_plonk::SetupError::SrsTooSmall { .. }))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn test_completeness(x in any::<u64>(), seed in any::<[u8; 32]>()) {
        let mut rng = make_test_rng(Some(seed));
        let srs = srs();
        let circuit = cubic();
        let x = Fr::from(x);
        let y = x * x * x + x + Fr::from(5u64);
        let witness = circuit.solve(&[y], &[x]).unwrap();
        for system in SYSTEMS {
            let cs: ConstraintSystem<Bn254> = compile(&circuit, system);
            let (pk, vk) = setup(&cs, Some(&srs), &mut rng).unwrap();
            let proof: Proof<Bn254> = prove(&pk, &cs, &witness, &mut rng).unwrap();
            prop_assert!(verify(&vk, &[y], &proof).is_accepted());
        }
    }
}
