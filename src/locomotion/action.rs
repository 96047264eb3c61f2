//! Attack and gather actions layered over locomotion.
//!
//! Actions never move the character. They only feed the animation block,
//! and gathering yields to any movement intent or to leaving the ground.

use bevy::prelude::*;

use crate::locomotion::resources::{ActionTuning, InputSnapshot};
use crate::locomotion::state::MovementState;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionInput {
    pub attack_pressed: bool,
    pub gather_pressed: bool,
    attack_elapsed: f32,
    gather_elapsed: f32,
}

impl ActionInput {
    /// Start an attack. A running attack is not restarted.
    pub fn press_attack(&mut self) {
        if !self.attack_pressed {
            self.attack_pressed = true;
            self.attack_elapsed = 0.0;
        }
    }

    pub fn press_gather(&mut self) {
        if !self.gather_pressed {
            self.gather_pressed = true;
            self.gather_elapsed = 0.0;
        }
    }

    /// Advance one tick: cancel gathering on movement input or an airborne
    /// state, then end each action once its clip duration has elapsed.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        state: MovementState,
        tuning: &ActionTuning,
        dt: f32,
    ) {
        if self.gather_pressed && (input.has_movement() || state.is_airborne()) {
            self.gather_pressed = false;
            debug!("Gather cancelled: state {:?}", state);
        }

        if self.attack_pressed {
            self.attack_elapsed += dt;
            if self.attack_elapsed >= tuning.attack_duration {
                self.attack_pressed = false;
            }
        }

        if self.gather_pressed {
            self.gather_elapsed += dt;
            if self.gather_elapsed >= tuning.gather_duration {
                self.gather_pressed = false;
            }
        }
    }

    /// True while an action that overrides the locomotion layer plays.
    /// Attacks blend over locomotion, so only gathering counts.
    pub fn is_playing_action(&self) -> bool {
        self.gather_pressed
    }
}
