//! The generational search loop, and the scenarios it scores genes against.

use crate::{
    config::SearchConfig,
    data::Dataset,
    error::Result,
    genome::{Gene, Layout, Weights},
    metric::Metric,
    network::predict,
    population::{create_population, score_population},
    random::rng_from_seed,
    reproduce::{mutate, reproduce},
};
use core::ops::ControlFlow;
use log::{debug, info, warn};
use rand::Rng;

/// Something genes of a fixed [Layout] can be scored against. Higher fitness is better, and
/// fitness should never be negative.
pub trait Scenario: Sync {
    fn layout(&self) -> Layout;
    fn eval(&self, weights: &Weights) -> Result<f64>;
}

/// Binary classification of a [Dataset], scored by comparing predicted labels to true labels
#[derive(Debug)]
pub struct Classification<'a, M: Metric> {
    data: &'a Dataset,
    layout: Layout,
    metric: M,
}

impl<'a, M: Metric> Classification<'a, M> {
    pub fn new(data: &'a Dataset, layout: Layout, metric: M) -> Self {
        Self {
            data,
            layout,
            metric,
        }
    }
}

impl<M: Metric> Scenario for Classification<'_, M> {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn eval(&self, weights: &Weights) -> Result<f64> {
        Ok(self
            .metric
            .score(self.data.labels(), &predict(weights, self.data)?))
    }
}

/// State of a search just after a generation was scored
#[derive(Debug)]
pub struct Stats<'a> {
    /// 0-indexed generation that was just scored
    pub generation: usize,
    pub population: &'a [Gene],
    pub fitness: &'a [f64],
    /// Highest fitness of this generation
    pub max_fitness: f64,
    /// Best fitness that counted as progress so far
    pub best_fitness: f64,
    pub best_gene: Option<&'a Gene>,
    /// Generations without progress still tolerated
    pub patience: usize,
}

pub type Hook = Box<dyn FnMut(&Stats<'_>) -> ControlFlow<()>>;

/// Observers called after each scored generation. Any of them may stop the search.
#[derive(Default)]
pub struct EvolutionHooks {
    hooks: Vec<Hook>,
}

impl EvolutionHooks {
    pub fn new(hooks: Vec<Hook>) -> Self {
        Self { hooks }
    }

    pub fn push(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    fn fire(&mut self, stats: &Stats<'_>) -> ControlFlow<()> {
        for hook in self.hooks.iter_mut() {
            if hook(stats).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// Why a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Every generation in the budget was evaluated
    Exhausted,
    /// Too many consecutive generations without progress
    Patience,
    /// A hook asked to stop
    Hook,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Best fitness that counted as progress, 0 if nothing ever did
    pub best_fitness: f64,
    /// The gene behind `best_fitness`
    pub best_gene: Option<Gene>,
    /// Generations scored
    pub generations: usize,
    pub stop: Stop,
}

/// Search for the fittest gene. Each generation is scored, the best so far is updated when the
/// generation beats it by at least `config.tolerance`, and the next generation is bred from this
/// one whether it improved or not. The search ends when the generation budget runs out, when
/// `config.max_attempts` generations in a row fail to improve, or when a hook breaks.
///
/// Any error aborts the whole search.
pub fn evolve(
    scenario: &impl Scenario,
    config: &SearchConfig,
    rng: &mut impl Rng,
    mut hooks: EvolutionHooks,
) -> Result<Outcome> {
    config.validate()?;
    if config.population % 2 == 1 {
        warn!(
            "odd population of {} shrinks to {} after the first generation",
            config.population,
            config.population - 1
        );
    }

    let layout = scenario.layout();
    let mut population = create_population(&config.pool, layout, config.population, rng)?;
    let mut best_fitness = 0.;
    let mut best_gene: Option<Gene> = None;
    let mut patience = config.max_attempts;
    let mut generations = 0;
    let mut stop = Stop::Exhausted;

    for generation in 0..config.generations {
        info!("generation {} of {}", generation + 1, config.generations);
        if patience == 0 {
            warn!(
                "stopping early, no improvement in {} generations",
                config.max_attempts
            );
            stop = Stop::Patience;
            break;
        }

        let scored = score_population(&population, scenario)?;
        generations += 1;

        let max_fitness = scored.max_fitness();
        if max_fitness - best_fitness < config.tolerance {
            patience -= 1;
        } else {
            patience = config.max_attempts;
            best_fitness = max_fitness;
            best_gene = Some(scored.fittest(&population).clone());
        }
        debug!("max fitness {max_fitness:.4}, best {best_fitness:.4}, patience {patience}");

        let flow = hooks.fire(&Stats {
            generation,
            population: &population,
            fitness: &scored.fitness,
            max_fitness,
            best_fitness,
            best_gene: best_gene.as_ref(),
            patience,
        });
        if flow.is_break() {
            info!("stopped by hook after generation {}", generation + 1);
            stop = Stop::Hook;
            break;
        }

        let offspring = reproduce(&population, &scored.probabilities, rng)?;
        population = mutate(offspring, config.mutation, &config.pool, rng)?;
    }

    Ok(Outcome {
        best_fitness,
        best_gene,
        generations,
        stop,
    })
}

/// Classify `data` with a gene modelling all of its variables and static features, scored by
/// `metric`, seeded from `config.seed`
pub fn search(config: &SearchConfig, data: &Dataset, metric: impl Metric) -> Result<Outcome> {
    let scenario = Classification::new(data, data.layout()?, metric);
    let mut rng = rng_from_seed(config.seed);
    evolve(&scenario, config, &mut rng, EvolutionHooks::default())
}
