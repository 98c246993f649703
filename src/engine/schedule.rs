//! Estimate when a submitted commit will execute.

/// Rounded-up division for a positive numerator and divisor.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}

/// Approximate wall-clock second at which a commit created at
/// `commit_created` executes, given the pool's last upkeep at `last_update`.
///
/// All arguments are unix seconds or durations in seconds, and
/// `update_interval` must be positive. Commits landing inside the
/// front-running window slip to the following interval.
pub fn get_expected_execution_timestamp(
    front_running_interval: i64,
    update_interval: i64,
    last_update: i64,
    commit_created: i64,
) -> i64 {
    let next_rebalance = last_update + update_interval;

    let time_since_commit = last_update - commit_created;
    let mut update_intervals_passed = if time_since_commit > 0 {
        ceil_div(time_since_commit, update_interval)
    } else {
        0
    };
    if update_intervals_passed == 1 {
        update_intervals_passed = 0;
    }

    let update_intervals_in_front_running_interval = if front_running_interval <= update_interval
    {
        0
    } else {
        ceil_div(front_running_interval, update_interval)
    };

    let potential_execution_time = next_rebalance
        + (update_intervals_in_front_running_interval - update_intervals_passed) * update_interval;

    if potential_execution_time - commit_created < front_running_interval {
        potential_execution_time + update_interval
    } else {
        potential_execution_time
    }
}
