//! The permutation argument enforcing copy constraints, following section 5
//! of the PLONK paper.
//!
//! The slot of column `j` on row `i` is labelled `k_j ω^i`, with `k_0 = 1`,
//! `k_1 = g` and `k_2 = g^2` for the multiplicative generator `g` of the
//! field, so that `H`, `k_1 H` and `k_2 H` are disjoint. All slots holding
//! the same wire form one cycle of the permutation `σ`.

use crate::ProverError;
use ark_ff::{batch_inversion, FftField, PrimeField};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain as D};
use rayon::prelude::*;
use snark_circuits::Gate;

/// Number of wire columns
pub const COLUMNS: usize = 3;

/// The coset shifts `[1, k_1, k_2]`.
pub fn shifts<F: FftField>() -> [F; COLUMNS] {
    let g = F::GENERATOR;
    [F::one(), g, g * g]
}

/// The wire held by each slot, column by column, for the gates padded to
/// the domain size with `zero_wire`.
pub fn wire_columns<F: PrimeField>(
    domain: D<F>,
    gates: &[Gate<F>],
    zero_wire: usize,
) -> [Vec<usize>; COLUMNS] {
    std::array::from_fn(|col| {
        (0..domain.size())
            .map(|row| gates.get(row).map_or(zero_wire, |g| g.wires[col]))
            .collect()
    })
}

/// Evaluations of `S_σ1, S_σ2, S_σ3` over the domain.
pub fn sigma_evals<F: PrimeField>(
    domain: D<F>,
    wires: &[Vec<usize>; COLUMNS],
    num_wires: usize,
    shifts: &[F; COLUMNS],
) -> [Vec<F>; COLUMNS] {
    let n = domain.size();
    let omegas: Vec<F> = domain.elements().collect();
    let label = |col: usize, row: usize| shifts[col] * omegas[row];

    // slots of each wire, in order
    let mut cycles: Vec<Vec<(usize, usize)>> = vec![vec![]; num_wires];
    for (col, column) in wires.iter().enumerate() {
        for (row, wire) in column.iter().enumerate() {
            cycles[*wire].push((col, row));
        }
    }

    let mut sigma: [Vec<F>; COLUMNS] = std::array::from_fn(|_| vec![F::zero(); n]);
    for cycle in cycles.iter().filter(|c| !c.is_empty()) {
        for (i, (col, row)) in cycle.iter().enumerate() {
            let (next_col, next_row) = cycle[(i + 1) % cycle.len()];
            sigma[*col][*row] = label(next_col, next_row);
        }
    }
    sigma
}

/// Evaluations of the permutation accumulator `z` over the domain:
/// `z(ω^0) = 1` and
///
/// ```text
/// z(ω^(i+1)) = z(ω^i) * Π_j (w_j(ω^i) + β k_j ω^i + γ) / Π_j (w_j(ω^i) + β σ_j(ω^i) + γ)
/// ```
///
/// Fails if the product over the whole domain is not one, which happens when
/// the wire values do not respect the copy constraints.
pub fn compute_z<F: PrimeField>(
    domain: D<F>,
    values: &[Vec<F>; COLUMNS],
    sigma: &[Vec<F>; COLUMNS],
    shifts: &[F; COLUMNS],
    beta: F,
    gamma: F,
) -> Result<Vec<F>, ProverError> {
    let n = domain.size();
    let omegas: Vec<F> = domain.elements().collect();
    let (numerators, mut denominators): (Vec<F>, Vec<F>) = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut num = F::one();
            let mut den = F::one();
            for col in 0..COLUMNS {
                num *= values[col][i] + beta * shifts[col] * omegas[i] + gamma;
                den *= values[col][i] + beta * sigma[col][i] + gamma;
            }
            (num, den)
        })
        .unzip();
    if denominators.iter().any(|d| d.is_zero()) {
        return Err(ProverError::Prover("the permutation accumulator divides by zero"));
    }
    batch_inversion(&mut denominators);

    let mut z = Vec::with_capacity(n);
    let mut acc = F::one();
    for i in 0..n {
        z.push(acc);
        acc *= numerators[i] * denominators[i];
    }
    if !acc.is_one() {
        return Err(ProverError::Prover("the permutation product is not one"));
    }
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::{One, UniformRand};
    use snark_utils::tests::make_test_rng;

    fn gate(wires: [usize; 3]) -> Gate<Fr> {
        Gate {
            wires,
            ..Gate::zero(0)
        }
    }

    #[test]
    fn test_sigma_is_a_permutation_of_labels() {
        let domain = D::<Fr>::new(4).unwrap();
        let gates = vec![gate([0, 1, 2]), gate([2, 0, 3]), gate([1, 1, 0])];
        let wires = wire_columns(domain, &gates, 3);
        let shifts = shifts::<Fr>();
        let sigma = sigma_evals(domain, &wires, 4, &shifts);

        let mut labels: Vec<Fr> = (0..COLUMNS)
            .flat_map(|col| domain.elements().map(move |w| shifts[col] * w))
            .collect();
        let mut images: Vec<Fr> = sigma.iter().flatten().copied().collect();
        labels.sort();
        images.sort();
        assert_eq!(labels, images);
    }

    #[test]
    fn test_z_product_checks_copies() {
        let mut rng = make_test_rng(None);
        let domain = D::<Fr>::new(4).unwrap();
        let gates = vec![gate([0, 1, 2]), gate([2, 0, 1])];
        let wires = wire_columns(domain, &gates, 3);
        let shifts = shifts::<Fr>();
        let sigma = sigma_evals(domain, &wires, 4, &shifts);

        let wire_values = [Fr::from(5u64), Fr::from(6u64), Fr::from(7u64), Fr::from(0u64)];
        let mut values: [Vec<Fr>; COLUMNS] =
            std::array::from_fn(|col| wires[col].iter().map(|w| wire_values[*w]).collect());
        let (beta, gamma) = (Fr::rand(&mut rng), Fr::rand(&mut rng));

        let z = compute_z(domain, &values, &sigma, &shifts, beta, gamma).unwrap();
        assert!(z[0].is_one());

        // break a copy constraint
        values[1][1] += Fr::one();
        assert_eq!(
            compute_z(domain, &values, &sigma, &shifts, beta, gamma),
            Err(ProverError::Prover("the permutation product is not one"))
        );
    }
}
