use ark_bn254::{Bn254, Fr};
use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};
use snark_circuits::{Circuit, CircuitBuilder, LinearCombination};
use snark_engine::{compile, prove, setup, verify, ProvingSystem};
use snark_poly_commitment::PairingSRS;
use snark_utils::tests::make_test_rng;

/// `x^(2^k)` by repeated squaring, exposing the result
fn squarings(k: usize) -> Circuit<Fr> {
    let mut builder = CircuitBuilder::new();
    let y = builder.public_input();
    let mut acc = builder.secret_input();
    for _ in 0..k {
        acc = builder.mul(acc, acc);
    }
    builder.enforce_equal(LinearCombination::from(acc), y);
    builder.build().unwrap()
}

pub fn bench_prove_verify(c: &mut Criterion) {
    let mut rng = make_test_rng(Some([0u8; 32]));
    let k = 1 << 10;
    let circuit = squarings(k);
    let x = Fr::from(3u64);
    let mut y = x;
    for _ in 0..k {
        y = y * y;
    }
    let witness = circuit.solve(&[y], &[x]).unwrap();
    let srs = PairingSRS::<Bn254>::create(4 * k, &mut rng).unwrap();

    for system in [ProvingSystem::Groth16, ProvingSystem::Plonk] {
        let mut group = c.benchmark_group(format!("{system:?}"));
        group.sample_size(10).sampling_mode(SamplingMode::Flat);

        let cs = compile::<Bn254>(&circuit, system);
        let (pk, vk) = setup(&cs, Some(&srs), &mut rng).unwrap();
        group.bench_function(format!("proof creation ({k} squarings)"), |b| {
            b.iter(|| black_box(prove(&pk, &cs, &witness, &mut rng).unwrap()))
        });

        let proof = prove(&pk, &cs, &witness, &mut rng).unwrap();
        group.bench_function("proof verification", |b| {
            b.iter(|| verify(&vk, black_box(&[y]), black_box(&proof)))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_prove_verify);
criterion_main!(benches);
