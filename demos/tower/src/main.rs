//! tower — command-line driver for the rust_lift elevator engine.
//!
//! Builds one building (a preset, or a `[[building]]` from a TOML file),
//! feeds it a call script (CSV, seeded random traffic, or the small
//! built-in script below), runs it to completion and prints a summary.
//!
//! ```text
//! tower --building building1 --calls demos/tower/calls.csv --out output/tower
//! tower --config demos/tower/buildings.toml --building office --random 10 --seed 7
//! RUST_LOG=lift_sim=debug tower --print
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};

use lift_core::{BuildingConfig, SimTime, find_building, load_buildings_toml};
use lift_output::{BuildingOutputObserver, CsvWriter, OutputWriter};
use lift_schedule::{Call, load_calls_csv, load_calls_reader};
use lift_sim::{
    Building, BuildingBuilder, BuildingObserver, EngineEvent, NoopObserver, ServiceStats,
    TrafficGenerator,
};

// ── Built-in call script ──────────────────────────────────────────────────────

// Valid for every preset (the smallest has floors 0–4).
const DEFAULT_CALLS: &str = "\
requested_at_ms,floor\n\
0,4\n\
0,2\n\
1000,3\n\
1000,3\n\
6000,0\n\
6500,1\n\
";

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tower", about = "Run a discrete-event elevator simulation")]
struct Args {
    /// Building name: a `[[building]]` from --config, or a built-in preset.
    #[arg(short, long, default_value = "building1")]
    building: String,

    /// TOML file with `[[building]]` tables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV call script (`requested_at_ms,floor`).
    #[arg(long, conflicts_with = "random")]
    calls: Option<PathBuf>,

    /// Generate this many minutes of random traffic instead of a script.
    #[arg(long, value_name = "MINUTES")]
    random: Option<u64>,

    /// Random traffic rate for the whole building.
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Show per-floor countdowns (overrides the building setting).
    #[arg(long)]
    countdown: bool,

    /// Write events.csv and calls.csv to this directory.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Write events.db instead of CSV (needs the `sqlite` feature).
    #[arg(long, requires = "out")]
    sqlite: bool,

    /// Print every engine event as it happens.
    #[arg(long)]
    print: bool,

    /// List the available buildings and exit.
    #[arg(long)]
    list: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Collects service stats and per-cab trip counts, echoes events when asked,
/// and forwards everything to `inner`.
struct Console<'a, O: BuildingObserver> {
    inner: &'a mut O,
    stats: ServiceStats,
    trips: Vec<usize>,
    print: bool,
}

impl<'a, O: BuildingObserver> Console<'a, O> {
    fn new(inner: &'a mut O, num_elevators: usize, print: bool) -> Self {
        Self {
            inner,
            stats: ServiceStats::default(),
            trips: vec![0; num_elevators],
            print,
        }
    }
}

impl<O: BuildingObserver> BuildingObserver for Console<'_, O> {
    fn on_event(&mut self, event: &EngineEvent) {
        if self.print {
            println!("{event}");
        }
        if let EngineEvent::ElevatorMoveStarted { elevator, .. } = *event {
            if let Some(n) = self.trips.get_mut(elevator.index()) {
                *n += 1;
            }
        }
        self.stats.on_event(event);
        self.inner.on_event(event);
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        self.stats.on_sim_end(final_time);
        self.inner.on_sim_end(final_time);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("tower"), level)
        .filter(Some("lift_core"), level)
        .filter(Some("lift_sim"), level)
        .filter(Some("lift_dispatch"), level)
        .filter(Some("lift_schedule"), level)
        .filter(Some("lift_output"), level)
        .parse_default_env()
        .init();
}

fn known_buildings(config: Option<&Path>) -> Result<Vec<BuildingConfig>> {
    match config {
        Some(path) => load_buildings_toml(path)
            .with_context(|| format!("loading buildings from {}", path.display())),
        None => Ok(Vec::new()),
    }
}

fn call_script(args: &Args, num_floors: u32) -> Result<Vec<Call>> {
    if let Some(path) = &args.calls {
        return load_calls_csv(path).with_context(|| format!("loading calls from {}", path.display()));
    }
    if let Some(minutes) = args.random {
        return Ok(TrafficGenerator::new(num_floors, args.seed)
            .horizon_ms(minutes * 60_000)
            .calls_per_minute(args.rate)
            .generate());
    }
    Ok(load_calls_reader(Cursor::new(DEFAULT_CALLS))?)
}

fn run<'a, O: BuildingObserver>(
    building: &mut Building,
    inner:    &'a mut O,
    print:    bool,
) -> Result<Console<'a, O>> {
    let mut console = Console::new(inner, building.elevators().len(), print);
    building.run(&mut console)?;
    Ok(console)
}

fn run_with_writer<W: OutputWriter>(
    building: &mut Building,
    writer:   W,
    print:    bool,
) -> Result<(ServiceStats, Vec<usize>)> {
    let mut obs = BuildingOutputObserver::new(writer, building);
    let (stats, trips) = {
        let console = run(building, &mut obs, print)?;
        (console.stats, console.trips)
    };
    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }
    Ok((stats, trips))
}

#[cfg(feature = "sqlite")]
fn run_sqlite(building: &mut Building, dir: &Path, print: bool) -> Result<(ServiceStats, Vec<usize>)> {
    run_with_writer(building, lift_output::SqliteWriter::new(dir)?, print)
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_building: &mut Building, _dir: &Path, _print: bool) -> Result<(ServiceStats, Vec<usize>)> {
    anyhow::bail!("--sqlite needs tower built with the `sqlite` feature")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let buildings = known_buildings(args.config.as_deref())?;

    if args.list {
        println!("{:<14} {:>7} {:>10} {:>10} {:>9}", "Building", "Floors", "Elevators", "ms/floor", "Dwell ms");
        println!("{}", "-".repeat(54));
        for b in buildings.iter().cloned().chain(BuildingConfig::presets()) {
            println!(
                "{:<14} {:>7} {:>10} {:>10} {:>9}",
                b.name, b.num_floors, b.num_elevators, b.travel_ms_per_floor, b.dwell_ms
            );
        }
        return Ok(());
    }

    let mut config = find_building(&buildings, &args.building)?;
    if args.countdown {
        config = config.with_countdown(true);
    }
    let calls = call_script(&args, config.num_floors)?;

    println!("=== tower — rust_lift elevator engine ===");
    println!(
        "Building: {}  |  Floors: {}  |  Elevators: {}  |  Calls: {}",
        config.name,
        config.num_floors,
        config.num_elevators,
        calls.len()
    );
    println!();

    let mut building = BuildingBuilder::new(config).calls(calls).build()?;

    let t0 = Instant::now();
    let (stats, trips) = match &args.out {
        None => {
            let mut noop = NoopObserver;
            let console = run(&mut building, &mut noop, args.print)?;
            (console.stats, console.trips)
        }
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            if args.sqlite {
                run_sqlite(&mut building, dir, args.print)?
            } else {
                run_with_writer(&mut building, CsvWriter::new(dir)?, args.print)?
            }
        }
    };
    let elapsed = t0.elapsed();
    info!("run finished at {} in {:.3} s wall", building.now(), elapsed.as_secs_f64());

    // Summary.
    println!("Simulated time : {}", building.now());
    println!(
        "Calls          : {} placed, {} ignored (already pending), {} served",
        stats.calls_placed, stats.calls_ignored, stats.served
    );
    match stats.mean_wait_ms() {
        Some(mean) => println!(
            "Wait           : mean {:.1} s, max {:.1} s",
            mean / 1000.0,
            stats.max_wait_ms as f64 / 1000.0
        ),
        None => println!("Wait           : no calls served"),
    }
    if let Some(dir) = &args.out {
        println!("Output         : {}", dir.display());
    }
    println!();

    println!("{:<10} {:<8} {:<8}", "Elevator", "Floor", "Trips");
    println!("{}", "-".repeat(28));
    for (cab, n) in building.elevators().iter().zip(&trips) {
        println!("{:<10} {:<8} {:<8}", cab.id().0, cab.current_floor().0, n);
    }

    Ok(())
}
