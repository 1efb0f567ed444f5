use core::{error::Error, ops::ControlFlow};
use env_logger::Env;
use genlstm::{
    data::Dataset,
    evolve,
    metric::MacroF1,
    network::predict,
    random::rng_from_seed,
    scenario::Hook,
    Classification, EvolutionHooks, SearchConfig, Stats,
};
use log::info;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rulinalg::matrix::Matrix;
use std::env;

const INDIVIDUALS: usize = 200;
const VARIABLES: usize = 2;

/// Individuals whose first variable drifts up or down over a noisy walk. The label is whether
/// it drifts up, with a static feature that hints at the answer.
fn synthetic(rng: &mut impl Rng) -> Result<Dataset, Box<dyn Error>> {
    let noise = Normal::new(0., 0.1)?;
    let mut sequences = Vec::with_capacity(INDIVIDUALS);
    let mut statics = Vec::with_capacity(INDIVIDUALS);
    let mut labels = Vec::with_capacity(INDIVIDUALS);

    for _ in 0..INDIVIDUALS {
        let up = rng.random_bool(0.5);
        let drift = if up { 0.05 } else { -0.05 };
        let steps = rng.random_range(4..16);

        let mut walk = 0.;
        let mut data = Vec::with_capacity(steps * VARIABLES);
        for _ in 0..steps {
            walk += drift + noise.sample(rng);
            data.push(walk);
            data.push(noise.sample(rng));
        }

        sequences.push(Matrix::new(steps, VARIABLES, data));
        statics.push(drift * 10. + noise.sample(rng) * 5.);
        labels.push(u8::from(up));
    }

    Ok(Dataset::new(
        sequences,
        Some(Matrix::new(INDIVIDUALS, 1, statics)),
        labels,
    )?)
}

fn report(stats: &Stats<'_>) -> ControlFlow<()> {
    if stats.generation % 10 == 0 {
        info!(
            "fittest of gen {}: {:.4} (best {:.4}, patience {})",
            stats.generation, stats.max_fitness, stats.best_fitness, stats.patience
        );
    }
    ControlFlow::Continue(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };

    let mut rng = rng_from_seed(config.seed);
    let data = synthetic(&mut rng)?;
    let scenario = Classification::new(&data, data.layout()?, MacroF1);

    let hook: Hook = Box::new(report);
    let outcome = evolve(&scenario, &config, &mut rng, EvolutionHooks::new(vec![hook]))?;

    println!(
        "best fitness {:.4} after {} generations ({:?})",
        outcome.best_fitness, outcome.generations, outcome.stop
    );
    if let Some(gene) = outcome.best_gene {
        let weights = genlstm::decode(&gene, data.layout()?)?;
        let correct = predict(&weights, &data)?
            .iter()
            .zip(data.labels())
            .filter(|(p, t)| p == t)
            .count();
        println!("{correct} of {} individuals labelled correctly", data.len());
        println!("{gene:?}");
    }

    Ok(())
}
