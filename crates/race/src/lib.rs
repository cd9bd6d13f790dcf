//! Animated sorting race: bubble, insertion and quick sort run side by side
//! on copies of one input, each paced by its own frame throttle and
//! reporting snapshots to its own observer, followed by an unthrottled
//! timing pass that produces the reported numbers.

pub mod benchmark;
pub mod board;
pub mod cancel;
pub mod config;
pub mod coordinator;
pub mod drivers;
pub mod error;
pub mod input;
pub mod progress;
pub mod report;
pub mod speed;
pub mod throttle;
pub mod trace;

pub use benchmark::{RaceResult, measure, measure_all};
pub use board::{LaneView, RaceBoard};
pub use cancel::Cancelled;
pub use config::RaceConfig;
pub use coordinator::{CompareMode, PreparedRace, RaceCoordinator, RaceOutcome, RaceState};
pub use error::RaceError;
pub use input::InputSpec;
pub use progress::{ChannelObserver, Highlight, LaneUpdate, ProgressEvent, ProgressObserver};
pub use report::RaceReport;
pub use sort::{SortAlgorithm, algorithm_name, all_algorithms};
pub use speed::{Speed, SpeedDial};
pub use throttle::FrameThrottle;
pub use tokio_util::sync::CancellationToken;
