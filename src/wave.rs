use glam::DVec2;
use rand::Rng;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Parameters for a single sinusoidal wave component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    pub amplitude: f64,
    pub wavelength: f64,
    pub wavenumber: DVec2,
    pub phase: f64,
    pub frequency: f64,
}

impl WaveComponent {
    /// Wave height contribution of this component at grid point (x, y) and time t
    pub fn evaluate(&self, x: f64, y: f64, time: f64) -> f64 {
        self.amplitude
            * (self.wavenumber.x * x + self.wavenumber.y * y - self.frequency * time + self.phase)
                .sin()
    }
}

/// Temporal frequency of a wave vector under the linear dispersion relation
pub fn linear_dispersion(wavenumber: DVec2, speed: f64) -> f64 {
    (speed / (2.0 * PI)) * wavenumber.length()
}

/// Draw one random wave component
///
/// Amplitude is uniform in [0, 0.1), wavelength uniform below `length_scale`,
/// direction factors uniform in [-1, 1), phase uniform in [0, 2π). Frequency
/// follows deterministically from the wave vector via linear dispersion.
pub fn random_component<R: Rng>(rng: &mut R, length_scale: f64, speed: f64) -> WaveComponent {
    let amplitude = rng.gen::<f64>() / 10.0;

    // A zero draw would make the wavenumber infinite; redraw until the
    // wavelength is strictly positive
    let wavelength = loop {
        let candidate = rng.gen::<f64>() * length_scale;
        if candidate > 0.0 {
            break candidate;
        }
    };

    let k = 2.0 * PI / wavelength;
    let wavenumber = DVec2::new(
        k * (2.0 * rng.gen::<f64>() - 1.0),
        k * (2.0 * rng.gen::<f64>() - 1.0),
    );

    let phase = 2.0 * PI * rng.gen::<f64>();
    let frequency = linear_dispersion(wavenumber, speed);

    WaveComponent {
        amplitude,
        wavelength,
        wavenumber,
        phase,
        frequency,
    }
}

/// Wave components keyed by index, established once at t = 0 and reused
/// unchanged for every later frame. The caller owns the set and threads it
/// from one call to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveParameterSet {
    components: BTreeMap<usize, WaveComponent>,
}

impl WaveParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WaveComponent> {
        self.components.get(&index)
    }

    /// Store a component at the given index, overwriting any prior entry
    pub fn insert(&mut self, index: usize, component: WaveComponent) {
        self.components.insert(index, component);
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &WaveComponent)> {
        self.components.iter().map(|(&i, c)| (i, c))
    }
}
