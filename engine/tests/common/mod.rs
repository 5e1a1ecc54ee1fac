#![allow(dead_code)]

use ark_bn254::{Bn254, Fr};
use snark_circuits::{Circuit, CircuitBuilder, LinearCombination, Variable};
use snark_poly_commitment::PairingSRS;
use snark_utils::tests::make_test_rng;

/// `x^3 + x + 5 = y`
pub fn cubic() -> Circuit<Fr> {
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

/// `x^3 + 2x + 5 = y`, with the same variable counts as [cubic]
pub fn other_cubic() -> Circuit<Fr> {
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

pub fn srs() -> PairingSRS<Bn254> {
    let mut rng = make_test_rng(Some([42u8; 32]));
    PairingSRS::create(32, &mut rng).unwrap()
}

/// `x + y = s`, `x y = p`, `x - y = d`, with public inputs `[s, p, d]`
pub fn sum_product_difference() -> Circuit<Fr> {
    let mut builder = CircuitBuilder::new();
    let s = builder.public_input();
    let p = builder.public_input();
    let d = builder.public_input();
    let x = builder.secret_input();
    let y = builder.secret_input();
    builder.enforce_named("sum", LinearCombination::from(x) + y, Variable::One, s);
    builder.enforce_named("product", x, y, p);
    builder.enforce_named("difference", LinearCombination::from(x) - y, Variable::One, d);
    builder.build().unwrap()
}
