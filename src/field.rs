use rand::Rng;
use rayon::prelude::*;
use std::f64::consts::PI;
use thiserror::Error;

use crate::wave::{random_component, WaveComponent, WaveParameterSet};

/// Parameters for the irregular wave field synthesis
#[derive(Debug, Clone)]
pub struct FieldParams {
    pub grid_size: usize,   // Grid resolution (N x N)
    pub num_waves: usize,   // Number of sinusoidal components to sum
    pub length_scale: f64,  // Upper bound for sampled wavelengths
    pub speed: f64,         // Propagation speed used in the dispersion relation
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            grid_size: 210,
            num_waves: 1000,
            length_scale: 10.0,
            speed: 1.0,
        }
    }
}

impl FieldParams {
    fn validate(&self) -> Result<(), WaveFieldError> {
        if self.grid_size == 0 {
            return Err(WaveFieldError::InvalidArgument("grid_size must be positive"));
        }
        if self.num_waves == 0 {
            return Err(WaveFieldError::InvalidArgument("num_waves must be positive"));
        }
        if !(self.length_scale > 0.0 && self.length_scale.is_finite()) {
            return Err(WaveFieldError::InvalidArgument(
                "length_scale must be positive and finite",
            ));
        }
        if !(self.speed > 0.0 && self.speed.is_finite()) {
            return Err(WaveFieldError::InvalidArgument("speed must be positive and finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum WaveFieldError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("missing wave component {index}: parameter set was not established at t = 0")]
    MissingComponent { index: usize },
}

/// Scalar wave elevation sampled on an N x N grid
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    pub resolution: usize,
    pub values: Vec<Vec<f64>>, // values[row][col], row follows y, col follows x
}

impl HeightField {
    /// Minimum and maximum elevation over the whole field
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for row in &self.values {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }
}

/// Evaluate the superposed irregular wave field at the given time.
///
/// At `time == 0` (exact equality, no tolerance) every component is drawn
/// fresh from `rng` and stored into the returned parameter set, overwriting
/// any prior entry. At any other time the supplied set must already hold a
/// component for every index; the field is then the same fixed wave pattern
/// propagated to `time` rather than independently resampled noise.
pub fn generate_wave_field<R: Rng>(
    params: &FieldParams,
    time: f64,
    wave_params: Option<WaveParameterSet>,
    rng: &mut R,
) -> Result<(HeightField, WaveParameterSet), WaveFieldError> {
    params.validate()?;

    let xs = linspace_two_pi(params.grid_size);
    let ys = linspace_two_pi(params.grid_size);

    let mut set = wave_params.unwrap_or_default();

    if time == 0.0 {
        // Random wave parameters are established only on the initial frame
        for i in 0..params.num_waves {
            set.insert(i, random_component(rng, params.length_scale, params.speed));
        }
    }

    let components: Vec<WaveComponent> = (0..params.num_waves)
        .map(|i| {
            set.get(i)
                .copied()
                .ok_or(WaveFieldError::MissingComponent { index: i })
        })
        .collect::<Result<_, _>>()?;

    // The parameter set is read-only from here on, so rows can be
    // accumulated in parallel
    let values: Vec<Vec<f64>> = ys
        .par_iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| components.iter().map(|w| w.evaluate(x, y, time)).sum())
                .collect()
        })
        .collect();

    Ok((
        HeightField {
            resolution: params.grid_size,
            values,
        },
        set,
    ))
}

/// `n` evenly spaced coordinates from 0 to 2π, endpoints included
fn linspace_two_pi(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let step = 2.0 * PI / (n as f64 - 1.0);
    (0..n).map(|i| i as f64 * step).collect()
}
