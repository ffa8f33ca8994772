// Rot model - spoilage countdown for perishable things
//
// Rot progress accumulates at a rate that depends only on the rounded
// ambient temperature. Below 0 °C nothing rots, from 10 °C upward things rot
// at full speed, and in between the rate scales linearly.

/// Rot progress of one perishable thing, in ticks
#[derive(Debug, Clone, PartialEq)]
pub struct RotState {
    /// Progress at which the thing counts as spoiled
    ticks_to_rot_start: u64,
    /// Accumulated progress, scaled by the rot rate at each advance
    progress: f64,
}

impl RotState {
    /// Fresh state for a thing that spoils after `ticks_to_rot_start` ticks at full rate
    pub fn new(ticks_to_rot_start: u64) -> Self {
        Self {
            ticks_to_rot_start,
            progress: 0.0,
        }
    }

    /// State with some rot progress already accumulated
    pub fn with_progress(mut self, progress: u64) -> Self {
        self.progress = progress.min(self.ticks_to_rot_start) as f64;
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Ticks left before spoiling if the temperature stays at `temperature`
    ///
    /// `None` when rotting is halted at that temperature.
    pub fn ticks_until_rot_at(&self, temperature: f32) -> Option<u64> {
        let rate = rot_rate_at_temperature(temperature);
        if rate <= 0.0 {
            return None;
        }
        let remaining = self.ticks_to_rot_start as f64 - self.progress;
        if remaining <= 0.0 {
            return Some(0);
        }
        Some((remaining / f64::from(rate)).round() as u64)
    }

    /// Accumulate `ticks` worth of rot at `temperature`
    pub fn advance(&mut self, ticks: u64, temperature: f32) {
        let rate = f64::from(rot_rate_at_temperature(temperature));
        self.progress = (self.progress + ticks as f64 * rate).min(self.ticks_to_rot_start as f64);
    }
}

/// Rot speed multiplier at a temperature in °C (rounded to whole degrees)
pub fn rot_rate_at_temperature(temperature: f32) -> f32 {
    let temperature = temperature.round();
    if temperature < 0.0 {
        0.0
    } else if temperature >= 10.0 {
        1.0
    } else {
        temperature / 10.0
    }
}

/// How a storage condition affects spoilage, for the countdown tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotBand {
    /// Spoilage effectively stopped
    Frozen,
    /// Spoilage slowed down
    Refrigerated,
    /// Spoilage at full speed
    NotRefrigerated,
}

impl RotBand {
    /// Bands are half-open: `[0, 0.001)`, `[0.001, 0.999)`, `[0.999, ∞)`
    pub fn classify(rate: f32) -> Self {
        if rate < 0.001 {
            Self::Frozen
        } else if rate < 0.999 {
            Self::Refrigerated
        } else {
            Self::NotRefrigerated
        }
    }
}
