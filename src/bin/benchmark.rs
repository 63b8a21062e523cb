//! Headless timing of the step engine on scattered populations.
//!
//! cargo run --release --bin benchmark -- --bodies 3,50,200 --steps 2000

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use ballpit::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use ballpit::physics::{BodyStore, WorldBounds};

#[derive(Parser, Debug)]
struct Args {
    /// Population sizes to time, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = [3, 25, 100, 400])]
    bodies: Vec<usize>,

    /// Steps per population
    #[arg(short, long, default_value_t = 1000)]
    steps: u64,

    /// RNG seed for the scatter
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let bounds = WorldBounds::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);

    for &n in &args.bodies {
        let mut store = BodyStore::scatter(n, bounds, args.seed)?;

        let t0 = Instant::now();
        let mut contacts = 0usize;
        for _ in 0..args.steps {
            contacts += store.step(bounds).contacts;
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, steps = {}, total = {:8.6} s, per step = {:10.3} us, contacts = {contacts}",
            args.steps,
            elapsed,
            elapsed * 1e6 / args.steps.max(1) as f64,
        );
    }

    Ok(())
}
