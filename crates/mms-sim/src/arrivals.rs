//! Interarrival gaps → absolute arrival ticks.

use mms_core::Tick;

/// Cumulative sum of `gaps`: `arrival[0] = gap[0]`,
/// `arrival[i] = arrival[i - 1] + gap[i]`.
///
/// The result is non-decreasing, so array order is arrival order; every
/// later stage relies on that.  An empty slice yields an empty schedule.
pub fn schedule_arrivals(gaps: &[u64]) -> Vec<Tick> {
    gaps.iter()
        .scan(Tick::ZERO, |now, &gap| {
            *now = *now + gap;
            Some(*now)
        })
        .collect()
}
