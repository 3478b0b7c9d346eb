pub mod constants;
pub mod dates;
pub mod numeric;
pub mod progress;
pub mod runs;

pub use constants::*;
pub use dates::{format_date, parse_date, SeasonDay};
pub use numeric::round_to;
pub use progress::ProgressReporter;
pub use runs::{first_and_last, longest_run, Run};
