use rayon::prelude::*;

use super::{Grid, StepStrategy, ThresholdRule};

/// Advance the automaton by one synchronous whole-grid transition.
///
/// Every next state is computed into `scratch` reading only `current`,
/// then the two buffers are swapped so `current` holds the new state and
/// `scratch` is free for the next step. The swap moves, never copies.
pub fn step_once(current: &mut Grid, scratch: &mut Grid, rule: ThresholdRule, strategy: StepStrategy) {
    debug_assert_eq!(current.dimensions(), scratch.dimensions());

    match strategy {
        StepStrategy::Serial => fill_serial(current, scratch, rule),
        StepStrategy::Parallel => fill_parallel(current, scratch, rule),
    }

    std::mem::swap(current, scratch);
}

fn fill_serial(current: &Grid, scratch: &mut Grid, rule: ThresholdRule) {
    let (width, height) = current.dimensions();
    for y in 0..height {
        for x in 0..width {
            scratch.set(x, y, rule.next_state(current, x, y));
        }
    }
}

fn fill_parallel(current: &Grid, scratch: &mut Grid, rule: ThresholdRule) {
    let (width, height) = current.dimensions();
    // par_chunks_mut rejects a zero chunk size
    if width == 0 || height == 0 {
        return;
    }

    scratch
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = rule.next_state(current, x, y);
            }
        });
}
