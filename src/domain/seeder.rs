use rand::Rng;

use super::{CancelToken, Cancelled, Grid};

/// Fill `grid` with independent Bernoulli trials: each cell draws one
/// uniform sample in [0, 100) from `rng` and becomes Ground iff the
/// sample is below `fill_percent`. Cells are visited row-major from a
/// single stream, so a fixed seed reproduces the same grid.
pub fn seed<R: Rng>(
    grid: &mut Grid,
    fill_percent: u8,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<(), Cancelled> {
    let fill = u32::from(fill_percent.min(100));
    let (width, height) = grid.dimensions();

    for y in 0..height {
        for x in 0..width {
            cancel.check()?;
            grid.set(x, y, rng.random_range(0..100u32) < fill);
        }
    }

    Ok(())
}
