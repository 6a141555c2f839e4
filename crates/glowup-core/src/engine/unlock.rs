//! Week unlock evaluation.

use jiff::{SignedDuration, Timestamp};
use log::debug;

use crate::models::RoadmapGraph;

/// Seven days, after which a stalled week opens the next one anyway.
pub const DEFAULT_FALLBACK_SECS: i64 = 604_800;

/// Rules for unlocking weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPolicy {
    /// How long a week may stay unlocked-but-incomplete before the next
    /// week unlocks regardless.
    pub fallback_after: SignedDuration,
}

impl UnlockPolicy {
    /// Creates a policy with a custom fallback interval.
    pub fn with_fallback(fallback_after: SignedDuration) -> Self {
        Self { fallback_after }
    }

    /// Whether the fallback interval has passed between `since` and `now`.
    pub fn fallback_elapsed(&self, since: Timestamp, now: Timestamp) -> bool {
        now.duration_since(since) >= self.fallback_after
    }
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self::with_fallback(SignedDuration::from_secs(DEFAULT_FALLBACK_SECS))
    }
}

/// Unlocks every week whose predecessor is completed or has been unlocked
/// for at least the fallback interval.
///
/// Weeks are visited in ascending number order in a single pass. The first
/// week is never re-derived. Returns the numbers of weeks unlocked by this
/// call.
pub fn evaluate_unlocks(
    graph: &mut RoadmapGraph,
    now: Timestamp,
    policy: &UnlockPolicy,
) -> Vec<u32> {
    let order = graph.week_ids_in_order();
    let mut unlocked = Vec::new();

    for pair in order.windows(2) {
        let (previous_id, week_id) = (pair[0], pair[1]);

        let eligible = match graph.weeks.get(&previous_id) {
            Some(previous) => {
                previous.is_completed
                    || previous
                        .unlocked_at
                        .is_some_and(|at| policy.fallback_elapsed(at, now))
            }
            None => false,
        };

        let Some(week) = graph.weeks.get_mut(&week_id) else {
            continue;
        };
        if week.is_unlocked || !eligible {
            continue;
        }

        week.unlock(now);
        debug!("Unlocked week {} of plan {}", week.number, week.plan_id);
        unlocked.push(week.number);
    }

    unlocked
}

/// Brings a freshly loaded graph up to date.
///
/// Runs the unlock pass and refreshes plan metadata when anything changed.
/// Returns the weeks unlocked and whether the graph needs to be saved.
pub fn reconcile(
    graph: &mut RoadmapGraph,
    now: Timestamp,
    policy: &UnlockPolicy,
) -> (Vec<u32>, bool) {
    let unlocked = evaluate_unlocks(graph, now, policy);
    let changed = !unlocked.is_empty() || graph.metadata_is_stale();
    if changed {
        graph.refresh_metadata(now);
    }
    (unlocked, changed)
}
