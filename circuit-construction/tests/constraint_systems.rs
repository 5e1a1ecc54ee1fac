use ark_bn254::Fr;
use ark_ff::{One, Zero};
use proptest::prelude::*;
use snark_circuits::{
    Circuit, CircuitBuilder, LinearCombination, PlonkConstraintSystem, Variable, WitnessError,
};

/// `sum_i c_i x_i^2 + k = out`, over `n` secret inputs.
fn weighted_squares(coeffs: &[u64], k: u64) -> Circuit<Fr> {
    let mut builder = CircuitBuilder::new();
    let out = builder.public_input();
    let mut sum = LinearCombination::constant(Fr::from(k));
    for c in coeffs {
        let x = builder.secret_input();
        let sq = builder.mul(x, x);
        sum = sum + LinearCombination::term(sq, Fr::from(*c));
    }
    builder.enforce_named("sum", sum, Variable::One, out);
    builder.build().unwrap()
}

fn expected_output(coeffs: &[u64], xs: &[u64], k: u64) -> Fr {
    coeffs
        .iter()
        .zip(xs)
        .map(|(c, x)| Fr::from(*c) * Fr::from(*x) * Fr::from(*x))
        .sum::<Fr>()
        + Fr::from(k)
}

proptest! {
    #[test]
    fn both_compilations_accept_solved_witnesses(
        (coeffs, xs) in (1usize..6).prop_flat_map(|n| (
            prop::collection::vec(0u64..1000, n),
            prop::collection::vec(any::<u64>(), n),
        )),
        k in any::<u64>(),
    ) {
        let circuit = weighted_squares(&coeffs, k);
        let public = [expected_output(&coeffs, &xs, k)];
        let secret: Vec<Fr> = xs.iter().map(|x| Fr::from(*x)).collect();
        let witness = circuit.solve(&public, &secret).unwrap();

        prop_assert_eq!(circuit.to_r1cs().is_satisfied(&witness), Ok(()));
        let plonk: PlonkConstraintSystem<Fr> = circuit.to_plonk();
        prop_assert!(plonk.is_well_formed());
        prop_assert_eq!(plonk.is_satisfied(&witness), Ok(()));
    }

    #[test]
    fn both_compilations_reject_wrong_outputs(
        xs in prop::collection::vec(any::<u64>(), 3),
        delta in 1u64..u64::MAX,
    ) {
        let coeffs = [1, 2, 3];
        let circuit = weighted_squares(&coeffs, 7);
        let secret: Vec<Fr> = xs.iter().map(|x| Fr::from(*x)).collect();
        let wrong = [expected_output(&coeffs, &xs, 7) + Fr::from(delta)];

        let expected_err = WitnessError::Unsatisfied {
            constraint: 3,
            label: Some("sum".to_string()),
        };
        prop_assert_eq!(circuit.solve(&wrong, &secret), Err(expected_err.clone()));

        // the solver refuses, so patch a correct witness instead
        let right = [expected_output(&coeffs, &xs, 7)];
        let mut witness = circuit.solve(&right, &secret).unwrap();
        witness.public = wrong.to_vec();
        prop_assert_eq!(circuit.to_r1cs().is_satisfied(&witness), Err(expected_err.clone()));
        prop_assert_eq!(circuit.to_plonk().is_satisfied(&witness), Err(expected_err));
    }
}

#[test]
fn test_plonk_zero_scale_wires() {
    // (x + 1) * (0x + 2) = y, the right operand has no variable
    let mut builder = CircuitBuilder::<Fr>::new();
    let y = builder.public_input();
    let x = builder.secret_input();
    let a = LinearCombination::from(x) + LinearCombination::constant(Fr::one());
    builder.enforce(a, LinearCombination::constant(Fr::from(2u64)), y);
    let circuit = builder.build().unwrap();

    let witness = circuit.solve(&[Fr::from(10u64)], &[Fr::from(4u64)]).unwrap();
    let plonk = circuit.to_plonk();
    assert_eq!(plonk.is_satisfied(&witness), Ok(()));
    let values = plonk.wire_values(&witness).unwrap();
    assert!(values[plonk.zero_wire()].is_zero());
}

#[test]
fn test_wrong_private_length() {
    let circuit = weighted_squares(&[1], 0);
    let mut witness = circuit.solve(&[Fr::from(4u64)], &[Fr::from(2u64)]).unwrap();
    witness.private.pop();
    let expected = Err(WitnessError::PrivateLength {
        expected: 2,
        got: 1,
    });
    assert_eq!(circuit.to_r1cs().is_satisfied(&witness), expected);
    assert_eq!(circuit.to_plonk().is_satisfied(&witness), expected);
}

#[test]
fn test_dropped_constants_keep_constraint_positions() {
    let _ = env_logger::builder().is_test(true).try_init();

    // 0: 2 * 3 = 6 is dropped, 1: x * x = sq, 2: sq = out
    let mut builder = CircuitBuilder::<Fr>::new();
    let out = builder.public_input();
    let x = builder.secret_input();
    builder.enforce(
        LinearCombination::constant(Fr::from(2u64)),
        LinearCombination::constant(Fr::from(3u64)),
        LinearCombination::constant(Fr::from(6u64)),
    );
    let sq = builder.mul(x, x);
    builder.enforce_named("output", sq, Variable::One, out);
    let circuit = builder.build().unwrap();
    assert_eq!(circuit.constraints().len(), 2);

    let r1cs = circuit.to_r1cs();
    assert_eq!(r1cs.origins, vec![1, 2]);
    let plonk = circuit.to_plonk();
    assert_eq!(plonk.labels.get(&2).map(String::as_str), Some("output"));

    let mut witness = circuit.solve(&[Fr::from(9u64)], &[Fr::from(3u64)]).unwrap();
    witness.public[0] = Fr::from(10u64);
    let expected = Err(WitnessError::Unsatisfied {
        constraint: 2,
        label: Some("output".to_string()),
    });
    assert_eq!(circuit.is_satisfied(&witness), expected);
    assert_eq!(r1cs.is_satisfied(&witness), expected);
    assert_eq!(plonk.is_satisfied(&witness), expected);
}
