//! Functions related to breeding the next generation out of a scored population.

use crate::{
    crossover::crossover,
    error::{Error, Result},
    genome::Gene,
    population::draw,
    random::Happens,
};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

/// Breed `2 * (N / 2)` offspring out of `N` genes. Each pair of offspring comes from two parents
/// picked independently, with replacement, weighted by `probabilities`, and spliced at one
/// uniformly random point. An odd population loses its last slot.
pub fn reproduce(
    population: &[Gene],
    probabilities: &[f64],
    rng: &mut impl Rng,
) -> Result<Vec<Gene>> {
    if population.len() != probabilities.len() {
        return Err(Error::DimensionMismatch {
            what: "selection probabilities per gene",
            expected: population.len(),
            actual: probabilities.len(),
        });
    }

    let pairs = population.len() / 2;
    if pairs == 0 {
        return Ok(vec![]);
    }

    let select = WeightedIndex::new(probabilities)
        .map_err(|e| Error::Configuration(format!("invalid selection probabilities: {e}")))?;

    let mut offspring = Vec::with_capacity(pairs * 2);
    for _ in 0..pairs {
        let l = &population[select.sample(rng)];
        let r = &population[select.sample(rng)];
        let (a, b) = crossover(l, r, rng.random_range(0..l.len().max(1)));
        offspring.push(a);
        offspring.push(b);
    }

    Ok(offspring)
}

/// Replace gene values with fresh draws from `pool`, each with probability `prob`. The last
/// value of a gene is never mutated.
pub fn mutate_gene(gene: &mut Gene, prob: f64, pool: &[f64], rng: &mut impl Rng) -> Result<()> {
    let mutable = gene.len().saturating_sub(1);
    for value in gene[..mutable].iter_mut() {
        if rng.happens(prob) {
            *value = draw(pool, rng)?;
        }
    }
    Ok(())
}

/// [mutate_gene] across a whole population
pub fn mutate(
    mut population: Vec<Gene>,
    prob: f64,
    pool: &[f64],
    rng: &mut impl Rng,
) -> Result<Vec<Gene>> {
    if pool.is_empty() {
        return Err(Error::Configuration("genetic pool is empty".to_string()));
    }
    for gene in population.iter_mut() {
        mutate_gene(gene, prob, pool, rng)?;
    }
    Ok(population)
}
