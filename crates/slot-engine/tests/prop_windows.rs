//! Property-based tests for bookable-window merging.

use std::collections::HashSet;

use chrono::{Duration, NaiveTime};
use proptest::prelude::*;
use slot_engine::{merge_bookable_windows, TimeSlotSample, TICK_MINUTES};

// ── Strategies ───────────────────────────────────────────────────

/// Tick `index` of the day grid, so index 0 is 00:00 and index 12 is 01:00.
fn tick_time(index: usize) -> NaiveTime {
    let minutes = index as u32 * TICK_MINUTES as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

/// Up to 80 consecutive ticks with arbitrary free/busy flags. The start
/// index is capped so a trailing pad can never cross midnight.
fn arb_day_ticks() -> impl Strategy<Value = Vec<TimeSlotSample>> {
    (0usize..=200, proptest::collection::vec(any::<bool>(), 0..=80)).prop_map(|(start, flags)| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, is_free)| TimeSlotSample::new(tick_time(start + i), is_free))
            .collect()
    })
}

fn arb_required_minutes() -> impl Strategy<Value = u32> {
    5u32..=120
}

// ── Helpers ──────────────────────────────────────────────────────

/// Counts qualifying free runs the slow way, directly from the flags.
fn expected_window_count(samples: &[TimeSlotSample], required_minutes: u32) -> usize {
    let mut count = 0;
    let mut run_ticks = 0u32;
    for sample in samples {
        if sample.is_free {
            run_ticks += 1;
        } else {
            if run_ticks * TICK_MINUTES as u32 >= required_minutes {
                count += 1;
            }
            run_ticks = 0;
        }
    }
    if run_ticks * TICK_MINUTES as u32 >= required_minutes {
        count += 1;
    }
    count
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property 1: every emitted window is at least as long as requested.
    #[test]
    fn prop_windows_meet_required_duration(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        for window in merge_bookable_windows(&samples, required) {
            prop_assert!(
                window.duration_minutes() >= i64::from(required),
                "window {window} is shorter than {required} minutes"
            );
        }
    }

    /// Property 2: windows ascend and never overlap.
    #[test]
    fn prop_windows_ascend_and_never_overlap(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        let windows = merge_bookable_windows(&samples, required);
        for window in &windows {
            prop_assert!(window.start < window.end);
        }
        for pair in windows.windows(2) {
            prop_assert!(
                pair[0].end <= pair[1].start,
                "windows {} and {} overlap or are out of order",
                pair[0],
                pair[1]
            );
        }
    }

    /// Property 3: window edges always land on the tick grid of the input.
    #[test]
    fn prop_window_edges_come_from_free_ticks(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        let free_starts: HashSet<NaiveTime> = samples
            .iter()
            .filter(|s| s.is_free)
            .map(|s| s.time)
            .collect();
        let free_ends: HashSet<NaiveTime> = samples
            .iter()
            .filter(|s| s.is_free)
            .map(|s| s.time + Duration::minutes(TICK_MINUTES))
            .collect();

        for window in merge_bookable_windows(&samples, required) {
            prop_assert!(free_starts.contains(&window.start));
            prop_assert!(free_ends.contains(&window.end));
        }
    }

    /// Property 4: no busy tick ever falls inside a window.
    #[test]
    fn prop_busy_ticks_never_inside_windows(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        let windows = merge_bookable_windows(&samples, required);
        for sample in samples.iter().filter(|s| !s.is_free) {
            for window in &windows {
                prop_assert!(
                    sample.time < window.start || sample.time >= window.end,
                    "busy tick {} inside window {}",
                    sample.time,
                    window
                );
            }
        }
    }

    /// Property 5: raising the requirement only drops windows, never
    /// reshapes the survivors.
    #[test]
    fn prop_raising_duration_only_drops_windows(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        let lenient = merge_bookable_windows(&samples, required);
        let strict = merge_bookable_windows(&samples, required + 5);
        prop_assert!(strict.len() <= lenient.len());
        for window in &strict {
            prop_assert!(
                lenient.contains(window),
                "window {window} appeared only under the stricter requirement"
            );
        }
    }

    /// Property 6: the window count matches an independent run count taken
    /// straight from the flags.
    #[test]
    fn prop_window_count_matches_run_model(
        samples in arb_day_ticks(),
        required in arb_required_minutes(),
    ) {
        prop_assert_eq!(
            merge_bookable_windows(&samples, required).len(),
            expected_window_count(&samples, required)
        );
    }

    /// Property 7: a fully free day collapses to at most one window that
    /// covers every tick.
    #[test]
    fn prop_all_free_day_yields_one_covering_window(samples in arb_day_ticks()) {
        let all_free: Vec<TimeSlotSample> = samples
            .iter()
            .map(|s| TimeSlotSample::new(s.time, true))
            .collect();
        let windows = merge_bookable_windows(&all_free, 5);

        if all_free.is_empty() {
            prop_assert!(windows.is_empty());
        } else {
            prop_assert_eq!(windows.len(), 1);
            prop_assert_eq!(windows[0].start, all_free[0].time);
            prop_assert_eq!(
                windows[0].end,
                all_free[all_free.len() - 1].time + Duration::minutes(TICK_MINUTES)
            );
        }
    }
}
