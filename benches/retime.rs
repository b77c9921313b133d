#[macro_use]
extern crate criterion;

extern crate gpx_retime;
extern crate time;

use criterion::Criterion;
use gpx_retime::retime::redistribute;
use time::macros::datetime;

struct Fix {
    latitude: f64,
    longitude: f64,
}

impl gpx_retime::Point for Fix {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn elevation(&self) -> Option<f64> {
        None
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let track: Vec<Fix> = (0..10_000)
        .map(|i| {
            let angle = f64::from(i) * std::f64::consts::TAU / 10_000.;
            Fix {
                latitude: 47. + 0.01 * angle.sin(),
                longitude: 11. + 0.01 * angle.cos(),
            }
        })
        .collect();
    let start = datetime!(2024-10-08 11:00:00 UTC);

    c.bench_function("retime_10k", |b| b.iter(|| {
        redistribute(&track, start, 5100).unwrap()
    }));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10);

    targets = criterion_benchmark
}
criterion_main!(benches);
