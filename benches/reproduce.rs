use criterion::Criterion;
use genlstm::{
    data::linspace, population::create_population, random::default_rng, reproduce::reproduce,
    Layout,
};

fn bench_reproduce(bench: &mut Criterion) {
    let pool = linspace(-2., 2., 50);
    let layout = Layout::new(8, 4).unwrap();
    let mut rng = default_rng();
    let population = create_population(&pool, layout, 100, &mut rng).unwrap();
    let total = population.len() as f64 * (population.len() as f64 + 1.) / 2.;
    let probabilities: Vec<f64> = (1..=population.len()).map(|f| f as f64 / total).collect();

    bench.bench_function("reproduce", |b| {
        b.iter(|| reproduce(&population, &probabilities, &mut rng).unwrap())
    });
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_reproduce(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
