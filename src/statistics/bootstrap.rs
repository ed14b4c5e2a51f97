//! Bootstrap resampling of difference series.
//!
//! Resampling never touches its input: every call either returns a fresh
//! vector or writes into a caller-owned buffer, so one base series can be
//! shared by any number of trials.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::{BootstrapError, Result};
use crate::types::ResampleMethod;

/// Counter-based RNG seed generation using SplitMix64.
///
/// Maps a base seed and a trial counter to a well-distributed 64-bit seed,
/// giving every Monte Carlo trial its own stream. Results therefore do not
/// depend on how trials are scheduled across threads.
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    // See: https://xoshiro.di.unimi.it/splitmix64.c
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Produce one randomized variant of `series`.
///
/// # Arguments
///
/// * `series` - Difference scores to resample (left unchanged)
/// * `method` - Sampling discipline
/// * `rng` - Random source; each call consumes fresh draws from it
///
/// # Returns
///
/// A new vector with the same length as `series`, whose elements all come
/// from `series`.
///
/// # Errors
///
/// Returns [`BootstrapError::EmptyInput`] if `series` is empty.
pub fn resample<R: Rng + ?Sized>(
    series: &[f64],
    method: ResampleMethod,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(BootstrapError::EmptyInput {
            operation: "resample",
        });
    }

    let mut out = vec![0.0; series.len()];
    resample_into(series, method, rng, &mut out);
    Ok(out)
}

/// Resample `series` into an existing buffer.
///
/// Allocation-free version of [`resample`] for hot loops. An empty
/// `series` leaves `out` untouched.
///
/// # Panics
///
/// Panics if `out.len() != series.len()`.
pub fn resample_into<R: Rng + ?Sized>(
    series: &[f64],
    method: ResampleMethod,
    rng: &mut R,
    out: &mut [f64],
) {
    assert_eq!(
        out.len(),
        series.len(),
        "Output buffer must have same length as input series"
    );

    if series.is_empty() {
        return;
    }

    match method {
        ResampleMethod::WithReplacement => draw_with_replacement(series, rng, out),
        ResampleMethod::Permutation => {
            out.copy_from_slice(series);
            out.shuffle(rng);
        }
    }
}

/// Fill `out` with independent uniform draws from `source`.
///
/// `source` must be non-empty; `out` may have any length.
#[inline]
pub(crate) fn draw_with_replacement<R: Rng + ?Sized>(source: &[f64], rng: &mut R, out: &mut [f64]) {
    debug_assert!(!source.is_empty());
    for slot in out.iter_mut() {
        if let Some(&value) = source.choose(rng) {
            *slot = value;
        }
    }
}
