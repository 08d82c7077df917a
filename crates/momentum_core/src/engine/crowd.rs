//! Crowd noise intensity sampled by the audio layer.

use crate::config::CrowdConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct CrowdNoiseController {
    config: CrowdConfig,
    intensity: f32,
    /// Level the crowd relaxes back to between big moments
    baseline: f32,
}

impl Default for CrowdNoiseController {
    fn default() -> Self {
        Self::new()
    }
}

impl CrowdNoiseController {
    pub fn new() -> Self {
        Self::with_config(CrowdConfig::default())
    }

    pub fn with_config(config: CrowdConfig) -> Self {
        let start = config.initial_intensity.clamp(0.0, config.max_intensity);
        Self {
            config,
            intensity: start,
            baseline: start,
        }
    }

    pub fn set_intensity(&mut self, value: f32) {
        if value.is_finite() {
            self.intensity = value.clamp(0.0, self.config.max_intensity);
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Spike for a big play, saturating at `max_intensity`.
    pub fn pulse_on_big_play(&mut self) {
        self.intensity = (self.intensity + self.config.big_play_pulse).min(self.config.max_intensity);
    }

    /// Raise the resting level for a home crowd with something to cheer.
    pub fn apply_home_field_advantage(&mut self) {
        let ceiling = self.config.max_baseline.max(self.config.initial_intensity);
        self.baseline = (self.baseline + self.config.home_field_bonus).min(ceiling);
        self.intensity = self.intensity.max(self.baseline);
    }

    /// Relax toward the baseline by `relax_rate * delta_time` of the gap.
    pub fn relax(&mut self, delta_time: f32) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }
        let fraction = (self.config.relax_rate * delta_time).min(1.0);
        self.intensity += (self.baseline - self.intensity) * fraction;
    }

    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_initial_intensity() {
        let crowd = CrowdNoiseController::new();
        assert!((crowd.intensity() - 0.5).abs() < 1e-6);
        assert!((crowd.baseline() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_saturates() {
        let mut crowd = CrowdNoiseController::new();
        crowd.pulse_on_big_play();
        assert!((crowd.intensity() - 0.75).abs() < 1e-6);
        for _ in 0..5 {
            crowd.pulse_on_big_play();
        }
        assert!((crowd.intensity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_home_field_raises_baseline_up_to_cap() {
        let mut crowd = CrowdNoiseController::new();
        crowd.apply_home_field_advantage();
        assert!((crowd.baseline() - 0.55).abs() < 1e-6);
        assert!((crowd.intensity() - 0.55).abs() < 1e-6);

        for _ in 0..20 {
            crowd.apply_home_field_advantage();
        }
        assert!((crowd.baseline() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_relax_returns_toward_baseline() {
        let mut crowd = CrowdNoiseController::new();
        crowd.pulse_on_big_play();
        crowd.relax(1.0);
        // Half the 0.25 gap closed
        assert!((crowd.intensity() - 0.625).abs() < 1e-6);
        crowd.relax(100.0);
        assert!((crowd.intensity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_relax_ignores_bad_delta_time() {
        let mut crowd = CrowdNoiseController::new();
        crowd.pulse_on_big_play();
        crowd.relax(-1.0);
        crowd.relax(f32::INFINITY);
        assert!((crowd.intensity() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_set_intensity_clamps() {
        let mut crowd = CrowdNoiseController::new();
        crowd.set_intensity(3.0);
        assert!((crowd.intensity() - 1.0).abs() < 1e-6);
        crowd.set_intensity(-1.0);
        assert_eq!(crowd.intensity(), 0.0);
        crowd.set_intensity(f32::NAN);
        assert_eq!(crowd.intensity(), 0.0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut crowd = CrowdNoiseController::new();
        crowd.apply_home_field_advantage();
        crowd.pulse_on_big_play();
        crowd.reset();
        assert_eq!(crowd, CrowdNoiseController::new());
    }
}
