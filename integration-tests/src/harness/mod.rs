pub mod cluster;
pub mod tracing;

pub use self::cluster::{TestCluster, fixture_path};
pub use self::tracing::{CapturedEvent, init_test_tracing};
