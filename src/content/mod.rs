//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::load_controller_config;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::ControllerTuning;
use crate::respawn::RespawnSequencer;

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

/// Simulation step used to report the jump apex at load time.
const APEX_REPORT_DT: f32 = 1.0 / 60.0;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_controller_config);
    }
}

fn apply_controller_config(
    mut tuning: ResMut<ControllerTuning>,
    mut sequencer: ResMut<RespawnSequencer>,
) {
    match load_controller_config(Path::new(CONTROLLER_CONFIG_PATH)) {
        Ok(config) => {
            *tuning = config.tuning;
            sequencer.timing = config.respawn;
            info!("Loaded controller config from {}", CONTROLLER_CONFIG_PATH);
        }
        Err(e) => warn!("{}; using built-in defaults", e),
    }

    info!(
        "Jump apex at 60 Hz: {:.1} units",
        tuning.jump_apex(APEX_REPORT_DT)
    );
}
