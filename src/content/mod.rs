//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, load_tuning, parse_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::locomotion::LocomotionTuning;

/// Where the locomotion tuning file lives.
#[derive(Resource, Debug, Clone)]
pub struct TuningSource {
    pub path: PathBuf,
}

impl Default for TuningSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/locomotion.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningSource>()
            .add_systems(PreStartup, load_tuning_on_startup);
    }
}

/// Replace the default tuning with the file's contents, keeping defaults on failure.
fn load_tuning_on_startup(mut commands: Commands, source: Res<TuningSource>) {
    match load_tuning(&source.path) {
        Ok(tuning) => {
            info!(
                "Loaded locomotion tuning from {}: run_speed={}, sprint_speed={}, gravity={}",
                source.path.display(),
                tuning.movement.run_speed,
                tuning.movement.sprint_speed,
                tuning.vertical.gravity
            );
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
            commands.insert_resource(LocomotionTuning::default());
        }
    }
}
