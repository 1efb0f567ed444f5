//! Functions related to creating and scoring a population of genes.

use crate::{
    error::{Error, Result},
    genome::{decode, Gene, Layout},
    scenario::Scenario,
};
use rand::{seq::IndexedRandom, Rng};

/// Draw a single value from the genetic pool
#[inline]
pub fn draw(pool: &[f64], rng: &mut (impl Rng + ?Sized)) -> Result<f64> {
    pool.choose(rng)
        .copied()
        .ok_or_else(|| Error::Configuration("genetic pool is empty".to_string()))
}

/// A gene shaped for `layout`, every value drawn with replacement from `pool`
pub fn create_individual(pool: &[f64], layout: Layout, rng: &mut impl Rng) -> Result<Gene> {
    (0..layout.gene_len()).map(|_| draw(pool, rng)).collect()
}

/// `size` independently created genes
pub fn create_population(
    pool: &[f64],
    layout: Layout,
    size: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Gene>> {
    (0..size)
        .map(|_| create_individual(pool, layout, rng))
        .collect()
}

/// A population's fitness, and what selection makes of it
#[derive(Debug, Clone)]
pub struct Scored {
    /// Fitness of every gene, in population order
    pub fitness: Vec<f64>,
    /// Fitness normalized to sum to 1
    pub probabilities: Vec<f64>,
    /// Index of the first gene holding the highest fitness
    pub fittest: usize,
}

impl Scored {
    #[inline]
    pub fn max_fitness(&self) -> f64 {
        self.fitness[self.fittest]
    }

    /// The fittest gene, out of the population this was scored from
    #[inline]
    pub fn fittest<'a>(&self, population: &'a [Gene]) -> &'a Gene {
        &population[self.fittest]
    }
}

/// Fitness of a single gene
pub fn fitness(gene: &[f64], scenario: &impl Scenario) -> Result<f64> {
    scenario.eval(&decode(gene, scenario.layout())?)
}

#[cfg(not(feature = "parallel"))]
fn fitness_all(population: &[Gene], scenario: &impl Scenario) -> Result<Vec<f64>> {
    population
        .iter()
        .map(|gene| fitness(gene, scenario))
        .collect()
}

#[cfg(feature = "parallel")]
fn fitness_all(population: &[Gene], scenario: &impl Scenario) -> Result<Vec<f64>> {
    use rayon::prelude::*;
    population
        .par_iter()
        .map(|gene| fitness(gene, scenario))
        .collect()
}

/// Score every gene against `scenario`, and derive selection probabilities from the scores.
/// Fails when the population is empty, or when fitness does not sum to something positive.
pub fn score_population(population: &[Gene], scenario: &impl Scenario) -> Result<Scored> {
    if population.is_empty() {
        return Err(Error::Configuration("cannot score an empty population".to_string()));
    }

    let fitness = fitness_all(population, scenario)?;

    let fittest = fitness
        .iter()
        .enumerate()
        .fold(0, |best, (idx, f)| if *f > fitness[best] { idx } else { best });

    let total: f64 = fitness.iter().sum();
    if total.is_nan() || total <= 0. {
        return Err(Error::DegenerateFitness);
    }
    let probabilities = fitness.iter().map(|f| f / total).collect();

    Ok(Scored {
        fitness,
        probabilities,
        fittest,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        assert_f64_approx,
        data::Dataset,
        genome::Weights,
        metric::MacroF1,
        random::WyRng,
        scenario::Classification,
        test_cases,
    };
    use rulinalg::matrix::Matrix;

    /// Scores a gene by its first value, whatever the data says
    struct FirstValue(Layout);

    impl Scenario for FirstValue {
        fn layout(&self) -> Layout {
            self.0
        }

        fn eval(&self, weights: &Weights) -> Result<f64> {
            Ok(weights.flatten()[0])
        }
    }

    test_cases!(create_individual_len[
        cells_only = (1, 0),
        cells_wide = (4, 0),
        classifier = (2, 1),
        statics_only = (0, 3),
    ](shape) {
        let layout = Layout::new(shape.0, shape.1).unwrap();
        let pool = [-1., 0., 1.];
        let mut rng = WyRng::seeded(1);
        let gene = create_individual(&pool, layout, &mut rng).unwrap();
        assert_eq!(layout.gene_len(), gene.len());
        assert!(gene.iter().all(|v| pool.contains(v)));
    });

    #[test]
    fn test_create_population() {
        let layout = Layout::new(2, 1).unwrap();
        let mut rng = WyRng::seeded(2);
        let population = create_population(&[0.5], layout, 7, &mut rng).unwrap();
        assert_eq!(7, population.len());
        assert!(population.iter().all(|g| *g == vec![0.5; 28]));
    }

    #[test]
    fn test_empty_pool() {
        let layout = Layout::new(1, 0).unwrap();
        assert!(matches!(
            create_individual(&[], layout, &mut WyRng::seeded(0)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_score_probabilities() {
        let layout = Layout::new(1, 0).unwrap();
        let population: Vec<Gene> = [1., 3., 0., 4.]
            .iter()
            .map(|v| {
                let mut gene = vec![0.; 12];
                gene[0] = *v;
                gene
            })
            .collect();

        let scored = score_population(&population, &FirstValue(layout)).unwrap();
        assert_eq!(vec![1., 3., 0., 4.], scored.fitness);
        assert_f64_approx!(1., scored.probabilities.iter().sum::<f64>());
        assert_f64_approx!(0.375, scored.probabilities[1]);
        assert_eq!(3, scored.fittest);
        assert_eq!(4., scored.max_fitness());
        assert_eq!(&population[3], scored.fittest(&population));
    }

    #[test]
    fn test_score_first_of_ties() {
        let layout = Layout::new(1, 0).unwrap();
        let population: Vec<Gene> = [2., 5., 1., 5.]
            .iter()
            .map(|v| {
                let mut gene = vec![*v; 12];
                gene[11] = -(*v);
                gene
            })
            .collect();

        let scored = score_population(&population, &FirstValue(layout)).unwrap();
        assert_eq!(1, scored.fittest);
    }

    #[test]
    fn test_score_degenerate() {
        let layout = Layout::new(1, 0).unwrap();
        let population = vec![vec![0.; 12]; 4];
        assert_eq!(
            Some(Error::DegenerateFitness),
            score_population(&population, &FirstValue(layout)).err()
        );
    }

    #[test]
    fn test_score_empty() {
        let layout = Layout::new(1, 0).unwrap();
        assert!(matches!(
            score_population(&[], &FirstValue(layout)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_score_bad_gene_len() {
        let layout = Layout::new(1, 0).unwrap();
        let population = vec![vec![1.; 12], vec![1.; 11]];
        assert_eq!(
            Some(Error::GeneLength {
                expected: 12,
                actual: 11
            }),
            score_population(&population, &FirstValue(layout)).err()
        );
    }

    #[test]
    fn test_score_classification() {
        let data = Dataset::new(
            vec![
                Matrix::new(3, 1, vec![0.1, 0.2, 0.3]),
                Matrix::new(3, 1, vec![0.1, 0.2, 0.3]),
            ],
            None,
            vec![1, 0],
        )
        .unwrap();
        let layout = data.layout().unwrap();
        let scenario = Classification::new(&data, layout, MacroF1);

        // both individuals are labelled 1, so label 1 scores 2/3 and label 0 scores 0
        let population = vec![vec![1.; 12], vec![1.; 12]];
        let scored = score_population(&population, &scenario).unwrap();
        assert_f64_approx!(1. / 3., scored.max_fitness());
        assert_f64_approx!(0.5, scored.probabilities[0]);
    }
}
