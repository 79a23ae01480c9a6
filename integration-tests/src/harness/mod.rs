pub mod tracing;
pub mod workspace;

pub use tracing::{CapturedEvent, init_test_tracing};
pub use workspace::TestWorkspace;
