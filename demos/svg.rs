use plotters::prelude::*;
use rand::Rng;
use vorosweep::{BoundingBox, Tessellation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("sweep_random.svg", random_generators(1000))?;
    run_example("sweep_cross.svg", vec![50.0, 50.0, 30.0, 50.0, 50.0, 30.0, 70.0, 50.0, 50.0, 70.0])?;
    run_example("sweep_lattice.svg", lattice_generators(12))?;
    Ok(())
}

fn random_generators(count: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut generators = Vec::with_capacity(count * 2);
    for _ in 0..count {
        generators.push(rng.gen_range(0.0..100.0));
        generators.push(rng.gen_range(0.0..100.0));
    }
    generators
}

// A regular lattice: every interior vertex is shared by four cells.
fn lattice_generators(side: usize) -> Vec<f64> {
    let step = 100.0 / side as f64;
    (0..side * side)
        .flat_map(|i| [(i % side) as f64 * step + step * 0.5, (i / side) as f64 * step + step * 0.5])
        .collect()
}

fn run_example(filename: &str, generators: Vec<f64>) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let bounds = BoundingBox::from_extents(0.0, 0.0, 100.0, 100.0);
    let mut tess = Tessellation::new(bounds)?;
    tess.set_generators(&generators)?;
    tess.calculate()?;

    // Draw bounding box
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        BLACK.stroke_width(2),
    )))?;

    // Shade the closed cells; cells open towards the border have no polygon to fill.
    for site in tess.sites() {
        let points = site.points();
        if points.len() < 3 || points.len() != site.cell().len() {
            continue;
        }
        chart.draw_series(std::iter::once(Polygon::new(
            points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            BLUE.mix(0.1).filled(),
        )))?;
    }

    // Draw edges
    chart.draw_series(tess.edges().iter().map(|e| {
        PathElement::new(
            vec![(e.start().x, e.start().y), (e.end().x, e.end().y)],
            BLACK.mix(0.5),
        )
    }))?;

    // Draw generators
    chart.draw_series(
        tess.sites()
            .iter()
            .map(|s| Circle::new((s.x(), s.y()), 2, RED.filled())),
    )?;

    root.present()?;
    println!(
        "Saved {} ({} sites, {} edges)",
        filename,
        tess.count_sites(),
        tess.count_edges()
    );
    Ok(())
}
