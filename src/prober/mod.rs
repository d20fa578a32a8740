pub mod http;

use crate::report::CheckReport;
use crate::targets::TargetList;
use async_trait::async_trait;

pub use self::http::HttpProbe;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    pub fn is_reachable(self) -> bool {
        matches!(self, Reachability::Reachable)
    }
}

/// A single-shot reachability check. Implementations never fail: every error
/// is reported as [`Reachability::Unreachable`].
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, target: &str) -> Reachability;
}

/// Probes every target once, in list order, one at a time.
pub async fn check_targets<P>(probe: &P, targets: &TargetList) -> CheckReport
where
    P: Probe + ?Sized,
{
    let mut down = Vec::new();

    for target in targets.iter() {
        let outcome = probe.probe(target).await;
        tracing::info!(url = target, ?outcome, "probed");
        if !outcome.is_reachable() {
            down.push(target.to_string());
        }
    }

    CheckReport::new(targets.len(), down)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Reports the listed URLs as down and records the order of calls.
    struct ScriptedProbe {
        down: HashSet<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn new(down: &[&'static str]) -> Self {
            Self { down: down.iter().copied().collect(), calls: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl Probe for ScriptedProbe {
        async fn probe(&self, target: &str) -> Reachability {
            self.calls.lock().unwrap().push(target.to_string());
            if self.down.contains(target) {
                Reachability::Unreachable
            } else {
                Reachability::Reachable
            }
        }
    }

    fn targets(urls: &[&str]) -> TargetList {
        urls.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_all_reachable() {
        let probe = ScriptedProbe::new(&[]);
        let report = check_targets(&probe, &targets(&["a", "b", "c"])).await;
        assert_eq!(report.total(), 3);
        assert_eq!(report.down_count(), 0);
        assert!(report.down_list().is_empty());
    }

    #[tokio::test]
    async fn test_down_list_keeps_source_order() {
        let probe = ScriptedProbe::new(&["d", "b"]);
        let report = check_targets(&probe, &targets(&["a", "b", "c", "d"])).await;
        assert_eq!(report.total(), 4);
        assert_eq!(report.down_count(), 2);
        assert_eq!(report.down_list(), &["b".to_string(), "d".to_string()]);
    }

    #[tokio::test]
    async fn test_every_target_probed_once_in_order() {
        let probe = ScriptedProbe::new(&["a", "b"]);
        let report = check_targets(&probe, &targets(&["a", "b"])).await;
        assert_eq!(report.down_list(), &["a".to_string(), "b".to_string()]);
        assert_eq!(*probe.calls.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_repeat_run_is_stable() {
        let probe = ScriptedProbe::new(&[]);
        let list = targets(&["a", "b"]);
        let first = check_targets(&probe, &list).await;
        let second = check_targets(&probe, &list).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let probe = ScriptedProbe::new(&[]);
        let report = check_targets(&probe, &TargetList::default()).await;
        assert_eq!(report.total(), 0);
        assert_eq!(report.down_count(), 0);
        assert!(probe.calls.lock().unwrap().is_empty());
    }
}
