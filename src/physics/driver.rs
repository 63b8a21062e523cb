use bevy::prelude::*;
use tracing::info;

/// Resource: owned handle over the periodic step source.
///
/// The fixed-timestep schedule keeps ticking; `step_simulation` only runs
/// while the driver is running. Stopping needs no teardown.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDriver {
    running: bool,
    steps: u64,
}

impl Default for StepDriver {
    fn default() -> Self {
        Self {
            running: true,
            steps: 0,
        }
    }
}

impl StepDriver {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total steps taken since startup.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn start(&mut self) {
        if !self.running {
            info!(step = self.steps, "simulation resumed");
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(step = self.steps, "simulation stopped");
            self.running = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub(crate) fn record_step(&mut self) {
        self.steps += 1;
    }
}

/// Run condition for the step system.
pub fn driver_running(driver: Res<StepDriver>) -> bool {
    driver.is_running()
}

/// Space pauses or resumes stepping.
pub fn toggle_driver_on_space(keys: Res<ButtonInput<KeyCode>>, mut driver: ResMut<StepDriver>) {
    if keys.just_pressed(KeyCode::Space) {
        driver.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_and_start_are_idempotent() {
        let mut d = StepDriver::default();
        assert!(d.is_running());
        d.stop();
        d.stop();
        assert!(!d.is_running());
        d.start();
        d.start();
        assert!(d.is_running());
    }

    #[test]
    fn toggle_flips_state() {
        let mut d = StepDriver::default();
        d.toggle();
        assert!(!d.is_running());
        d.toggle();
        assert!(d.is_running());
    }
}
