pub mod filter;
pub mod gate;
pub mod histogram;
pub mod reader;
pub mod record;
pub mod scale;
pub mod session;
pub mod view;

pub use ergo_lens_common::{ErgoLensError, Result};

pub use filter::{Dimension, FilterState, ALL};
pub use gate::{assess, SampleSufficiency, MIN_SAMPLE_SIZE};
pub use histogram::{build_bins, max_count, total_count, Bin};
pub use reader::{load_csv, load_records, REQUIRED_COLUMNS};
pub use record::Record;
pub use scale::{DomainPolicy, LinearScale};
pub use session::{build_view, DashboardSession};
pub use view::{bar_color, ChartLabels, ViewState};
