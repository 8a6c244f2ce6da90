//! Uniform selection over candidates.

use crate::capabilities::RandomSource;
use crate::error::DrawError;
use crate::range::DrawRange;

/// Pick one candidate with uniform probability, consuming exactly one sample.
pub fn select_one<R: RandomSource + ?Sized>(
    candidates: &[i64],
    random: &mut R,
) -> Result<i64, DrawError> {
    if candidates.is_empty() {
        return Err(DrawError::NoCandidates);
    }
    let r = random.next_unit();
    Ok(candidates[scaled_index(r, candidates.len())])
}

/// One uniform integer in `min..=max`, independent of any history.
pub fn draw_random_int<R: RandomSource + ?Sized>(
    min: i64,
    max: i64,
    random: &mut R,
) -> Result<i64, DrawError> {
    let range = DrawRange::new(min, max)?;
    let r = random.next_unit();
    let size = range.size();
    let offset = ((r * size as f64).floor() as u128).min(size - 1);
    Ok((i128::from(range.min()) + offset as i128) as i64)
}

/// `floor(r * len)`, kept inside `0..len` even for samples at or past 1.0 or
/// products that round up.
fn scaled_index(r: f64, len: usize) -> usize {
    let idx = (r * len as f64).floor();
    if idx.is_nan() || idx < 0.0 {
        return 0;
    }
    (idx as usize).min(len - 1)
}
