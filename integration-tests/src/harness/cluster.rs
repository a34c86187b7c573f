use crate::harness::{CapturedEvent, init_test_tracing};
use podchooser_core::{ReplicaGroup, StaticPodLister};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// A fake orchestrator namespace backed by a JSON pod fixture.
pub struct TestCluster {
    pub lister: Arc<StaticPodLister>,
    pub group: ReplicaGroup,
}

impl TestCluster {
    /// Load `fixtures/<fixture>` and serve it for the `buildkitd` group.
    ///
    /// Also installs the capturing tracing subscriber. The event store is
    /// shared by every test in the binary and only ever appended to, so
    /// tests must filter captured events by a field they own.
    pub fn start(fixture: &str) -> Self {
        init_test_tracing(events());

        let json = fs::read_to_string(fixture_path(fixture))
            .unwrap_or_else(|e| panic!("failed to read fixture {fixture}: {e}"));

        Self {
            lister: Arc::new(StaticPodLister::from_json(&json).expect("invalid pod fixture")),
            group: ReplicaGroup::new("buildkitd"),
        }
    }

    /// Swap the served pods for another fixture.
    pub fn reload(&self, fixture: &str) {
        let json = fs::read_to_string(fixture_path(fixture)).expect("failed to read fixture");
        let pods = serde_json::from_str(&json).expect("invalid pod fixture");
        self.lister.set_pods(pods);
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

pub fn fixture_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}
