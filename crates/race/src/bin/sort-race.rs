use std::time::Duration;

use clap::Parser;
use race::{
    ChannelObserver, CompareMode, InputSpec, LaneUpdate, RaceBoard, RaceConfig, RaceCoordinator,
    RaceOutcome, Speed, input,
};
use tokio::sync::mpsc;

#[derive(Debug, Parser)]
#[command(name = "sort-race", about = "Race bubble, insertion and quick sort on one input")]
struct Args {
    /// Number of values to sort.
    #[arg(long, env = "SORT_RACE_LEN", default_value_t = 100)]
    len: usize,

    /// Animation speed, 1 (slowest) to 100.
    #[arg(long, env = "SORT_RACE_SPEED", default_value_t = 80)]
    speed: u8,

    /// Seed for the generated input; random when omitted.
    #[arg(long, env = "SORT_RACE_SEED")]
    seed: Option<u64>,

    #[arg(long, env = "SORT_RACE_MIN", default_value_t = 1)]
    min: i32,

    #[arg(long, env = "SORT_RACE_MAX", default_value_t = 1000)]
    max: i32,

    /// Skip the animated race and only time the kernels.
    #[arg(long)]
    instant: bool,

    /// Cancel the animated race after this many milliseconds.
    #[arg(long)]
    cancel_after_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    race::trace::init_tracing();
    let args = Args::parse();

    let config = RaceConfig {
        default_speed: Speed::new(args.speed)?,
        input: InputSpec {
            len: args.len,
            min: args.min,
            max: args.max,
        },
        ..RaceConfig::default()
    };
    let coordinator = RaceCoordinator::new(config)?;

    let values = match args.seed {
        Some(seed) => input::generate_seeded(&config.input, seed)?,
        None => input::generate(&config.input, &mut rand::rng())?,
    };
    println!("generated {} values in {}..={}", values.len(), args.min, args.max);

    let mode = if args.instant {
        CompareMode::Instant
    } else {
        CompareMode::Animated
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let ui = tokio::spawn(render(RaceBoard::new(&values), rx));

    let outcome = {
        let comparison = coordinator.compare(&values, mode, |algorithm| {
            ChannelObserver::new(algorithm, tx.clone())
        });
        match args.cancel_after_ms {
            Some(ms) => {
                tokio::pin!(comparison);
                tokio::select! {
                    outcome = &mut comparison => outcome?,
                    _ = tokio::time::sleep(Duration::from_millis(ms)) => {
                        coordinator.cancel();
                        comparison.await?
                    }
                }
            }
            None => comparison.await?,
        }
    };
    drop(tx);
    ui.await?;

    match outcome {
        RaceOutcome::Completed(report) => println!("{report}"),
        RaceOutcome::Cancelled => println!("race cancelled"),
    }
    Ok(())
}

async fn render(mut board: RaceBoard, mut rx: mpsc::UnboundedReceiver<LaneUpdate>) {
    while let Some(update) = rx.recv().await {
        let algorithm = update.algorithm;
        board.apply(update);
        if let Some(lane) = board.lane(algorithm).filter(|lane| lane.finished) {
            println!("{algorithm:<10} finished after {} frames", lane.frames);
        }
    }
}
