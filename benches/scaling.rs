use criterion::{criterion_group, BenchmarkId, Criterion};
use plotters::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;
use vorosweep::{BoundingBox, Site, Tessellation};

#[derive(Deserialize)]
struct Estimates {
    mean: Stats,
}

#[derive(Deserialize)]
struct Stats {
    point_estimate: f64,
    confidence_interval: ConfidenceInterval,
}

#[derive(Deserialize)]
struct ConfidenceInterval {
    lower_bound: f64,
    upper_bound: f64,
}

const SIZES: [usize; 5] = [10, 100, 1000, 10_000, 100_000];
const METHODS: [&str; 2] = ["uniform", "rows"];

// Sites on a few horizontal lines: long runs of events sharing the sweep coordinate.
fn row_sites(count: usize, bounds: &BoundingBox) -> Vec<Site> {
    let mut rng = StdRng::seed_from_u64(42);
    let rows = (count as f64).sqrt().ceil().max(1.0);
    (0..count)
        .map(|_| {
            let row = (rng.r#gen::<f64>() * rows).floor();
            let x = bounds.min[0] + rng.r#gen::<f64>() * bounds.width();
            let y = bounds.min[1] + (row + 0.5) / rows * bounds.height();
            Site::new(x, y)
        })
        .collect()
}

fn benchmark_scaling(c: &mut Criterion) {
    let bounds = BoundingBox::from_extents(0.0, 0.0, 100.0, 100.0);

    let mut group = c.benchmark_group("scaling");
    group.sample_size(10);

    for &size in &SIZES {
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, &s| {
            let mut tess = Tessellation::new(bounds).unwrap();
            tess.random_generators(s);
            b.iter(|| {
                tess.calculate().unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("rows", size), &size, |b, &s| {
            let mut tess = Tessellation::new(bounds).unwrap();
            tess.set_sites(row_sites(s, &bounds));
            b.iter(|| {
                tess.calculate().unwrap();
            })
        });
    }
    group.finish();
}

fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "local".to_string())
}

fn plot_scaling_results() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new("target/criterion/scaling");

    if !root.exists() {
        return Ok(());
    }

    let mut data: BTreeMap<&str, Vec<(usize, f64, f64, f64)>> = BTreeMap::new();

    for &method in &METHODS {
        let mut points = Vec::new();
        for &size in &SIZES {
            let path = root
                .join(method)
                .join(size.to_string())
                .join("base/estimates.json");

            if path.exists() {
                let reader = BufReader::new(File::open(&path)?);
                let estimates: Estimates = serde_json::from_reader(reader)?;
                points.push((
                    size,
                    estimates.mean.point_estimate / 1_000_000.0,
                    estimates.mean.confidence_interval.lower_bound / 1_000_000.0,
                    estimates.mean.confidence_interval.upper_bound / 1_000_000.0,
                ));
            }
        }
        if !points.is_empty() {
            points.sort_by_key(|k| k.0);
            data.insert(method, points);
        }
    }

    if data.is_empty() {
        return Ok(());
    }

    let out_dir = Path::new("benches/results");
    std::fs::create_dir_all(out_dir)?;
    let out_file = out_dir.join(format!("bench_scaling_{}.png", git_hash()));
    let root_area = BitMapBackend::new(&out_file, (1024, 768)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let min_y = data.values().flat_map(|v| v.iter().map(|p| p.2)).fold(f64::INFINITY, f64::min);
    let max_y = data.values().flat_map(|v| v.iter().map(|p| p.3)).fold(f64::NEG_INFINITY, f64::max);
    let first_n = SIZES[0] as f64;
    let last_n = SIZES[SIZES.len() - 1] as f64;

    let mut chart = ChartBuilder::on(&root_area)
        .caption("Sweep Scaling", ("sans-serif", 40).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (first_n..last_n).log_scale(),
            (min_y * 0.8..max_y * 1.5).log_scale(),
        )?;

    chart.configure_mesh()
        .x_desc("Number of Sites (N)")
        .y_desc("Time (ms)")
        .draw()?;

    // N log N reference anchored at the first measurement, dotted.
    if let Some(&(start_n, start_t, _, _)) = data.values().next().and_then(|s| s.first()) {
        let start_n = start_n as f64;
        let step = 10.0f64.powf(0.05);
        let mut reference = Vec::new();
        let mut n = first_n;
        while n <= last_n * 1.1 {
            reference.push((n, start_t * (n * n.ln()) / (start_n * start_n.ln())));
            n *= step;
        }

        chart.draw_series(PointSeries::of_element(
            reference,
            1,
            &BLACK,
            &|c, s, st| Circle::new(c, s, st.filled()),
        ))?
        .label("N log N")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));
    }

    let colors = [RED, BLUE, GREEN, MAGENTA, CYAN];

    for (i, (method, points)) in data.iter().enumerate() {
        let color = colors[i % colors.len()];

        let mut band_points = Vec::new();
        for (x, _, _, u) in points.iter() {
            band_points.push((*x as f64, *u));
        }
        for (x, _, l, _) in points.iter().rev() {
            band_points.push((*x as f64, *l));
        }

        chart.draw_series(std::iter::once(Polygon::new(
            band_points,
            color.mix(0.2).filled(),
        )))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|(x, y, _, _)| (*x as f64, *y)),
                &color,
            ))?
            .label(*method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    println!("Plot saved to {:?}", out_file);

    Ok(())
}

criterion_group!(benches, benchmark_scaling);

fn main() {
    benches();
    if let Err(e) = plot_scaling_results() {
        eprintln!("Error generating plot: {}", e);
    }
}
