#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

use std::{
    collections::hash_map::DefaultHasher,
    error::Error,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
};

use chaining_hashmap::{
    ChainingHashMap, HashMapExtensions, KeyHasher, hash_function_1, hash_function_2,
};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Same starting size as the growth examples in the tests
const INITIAL_CAPACITY: usize = 53;
const TOTAL_KEYS: usize = 5_000;
const SAMPLE_EVERY: usize = 50;
const KEY_LENGTHS: std::ops::Range<usize> = 4..12;

const COLORS: [RGBColor; 3] = [
    RGBColor(220, 50, 50),  // Bright red
    RGBColor(50, 90, 220),  // Bright blue
    RGBColor(50, 180, 50),  // Bright green
];

struct Sample {
    keys: usize,
    capacity: usize,
    load: f64,
    empty_ratio: f64,
    longest_chain: usize,
}

type Profile = (&'static str, Vec<Sample>);
type Series = (&'static str, Vec<(usize, f64)>);

fn std_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(KEY_LENGTHS);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

// Insert every key once, sampling the table shape as it grows
fn profile<H: KeyHasher>(hasher: H, keys: &[String]) -> Vec<Sample> {
    let mut map = ChainingHashMap::with_capacity_and_hasher(INITIAL_CAPACITY, hasher);
    let mut samples = Vec::with_capacity(keys.len() / SAMPLE_EVERY);

    for (index, key) in keys.iter().enumerate() {
        map.put(key.as_str(), index);
        if (index + 1) % SAMPLE_EVERY == 0 {
            samples.push(Sample {
                keys: map.len(),
                capacity: map.capacity(),
                load: map.table_load(),
                empty_ratio: map.empty_buckets() as f64 / map.capacity() as f64,
                longest_chain: map.longest_chain(),
            });
        }
    }

    samples
}

fn series(profiles: &[Profile], metric: impl Fn(&Sample) -> f64) -> Vec<Series> {
    profiles
        .iter()
        .map(|(name, samples)| (*name, samples.iter().map(|s| (s.keys, metric(s))).collect()))
        .collect()
}

fn draw_chart(path: &Path, caption: &str, y_desc: &str, series: &[Series]) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";

    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(x, _)| x))
        .max()
        .unwrap_or(1);
    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(0.0, f64::max)
        .max(1.0) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Keys inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, (name, points)) in series.iter().enumerate() {
        let color = COLORS.get(index % COLORS.len()).copied().unwrap_or(BLACK);
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    let mut rng = rand::rng();
    let keys: Vec<String> = (0..TOTAL_KEYS).map(|_| random_key(&mut rng)).collect();
    info!(keys = keys.len(), initial_capacity = INITIAL_CAPACITY, "profiling hashers");

    let profiles: Vec<Profile> = vec![
        ("hash_function_1", profile(hash_function_1, &keys)),
        ("hash_function_2", profile(hash_function_2, &keys)),
        ("std DefaultHasher", profile(std_hash, &keys)),
    ];

    for (name, samples) in &profiles {
        let worst_chain = samples.iter().map(|s| s.longest_chain).max().unwrap_or_default();
        if let Some(last) = samples.last() {
            info!(
                hasher = *name,
                len = last.keys,
                capacity = last.capacity,
                load = last.load,
                empty_ratio = last.empty_ratio,
                worst_chain,
                "profiled hasher"
            );
        }
    }

    draw_chart(
        &out_dir.join("table_load.svg"),
        "Table load while inserting",
        "len / capacity",
        &series(&profiles, |s| s.load),
    )?;
    draw_chart(
        &out_dir.join("empty_buckets.svg"),
        "Share of empty buckets",
        "empty buckets / capacity",
        &series(&profiles, |s| s.empty_ratio),
    )?;
    draw_chart(
        &out_dir.join("longest_chain.svg"),
        "Longest bucket chain",
        "entries in longest chain",
        &series(&profiles, |s| s.longest_chain as f64),
    )?;

    info!(
        dir = %out_dir.display(),
        "wrote table_load.svg, empty_buckets.svg, longest_chain.svg"
    );
    Ok(())
}
