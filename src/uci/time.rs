//! Time-budget derivation for the `go` command.

use std::time::Duration;

use super::command::GoParams;

/// Budget when the client sends no time information at all.
const DEFAULT_BUDGET: Duration = Duration::from_millis(10_000);

/// Map the client's time controls to a single search budget.
///
/// `movetime` is used exactly. Otherwise a fiftieth of the mover's remaining
/// clock plus the increment is allocated, never more than half the remaining
/// clock.
#[must_use]
pub fn allocate_time(params: &GoParams, white_to_move: bool) -> Duration {
    if let Some(movetime) = params.movetime {
        return Duration::from_millis(movetime);
    }

    let (time_left, increment) = if white_to_move {
        (params.wtime, params.winc)
    } else {
        (params.btime, params.binc)
    };

    match time_left {
        Some(left) => {
            let budget = (left / 50 + increment.unwrap_or(0)).min(left / 2).max(1);
            Duration::from_millis(budget)
        }
        None => DEFAULT_BUDGET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movetime_is_exact() {
        let params = GoParams {
            movetime: Some(250),
            wtime: Some(60_000),
            ..GoParams::default()
        };
        assert_eq!(allocate_time(&params, true), Duration::from_millis(250));
    }

    #[test]
    fn test_clock_fraction() {
        let params = GoParams {
            wtime: Some(50_000),
            btime: Some(10_000),
            ..GoParams::default()
        };
        assert_eq!(allocate_time(&params, true), Duration::from_millis(1000));
        assert_eq!(allocate_time(&params, false), Duration::from_millis(200));
    }

    #[test]
    fn test_increment_added() {
        let params = GoParams {
            wtime: Some(50_000),
            winc: Some(500),
            ..GoParams::default()
        };
        assert_eq!(allocate_time(&params, true), Duration::from_millis(1500));
    }

    #[test]
    fn test_capped_at_half_remaining() {
        // Huge increment against a nearly empty clock
        let params = GoParams {
            btime: Some(200),
            binc: Some(10_000),
            ..GoParams::default()
        };
        assert_eq!(allocate_time(&params, false), Duration::from_millis(100));
    }

    #[test]
    fn test_never_zero() {
        let params = GoParams {
            wtime: Some(1),
            ..GoParams::default()
        };
        assert!(allocate_time(&params, true) >= Duration::from_millis(1));
    }

    #[test]
    fn test_default_when_no_clock() {
        let params = GoParams::default();
        assert_eq!(allocate_time(&params, true), DEFAULT_BUDGET);
    }
}
