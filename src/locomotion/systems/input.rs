//! Locomotion domain: input sampling into the per-tick snapshot.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::locomotion::{ActionInput, InputBindings, InputSnapshot};

/// Hold mode follows the key; toggle mode flips on each press.
pub fn update_latch(on: bool, pressed: bool, released: bool, hold: bool) -> bool {
    if pressed {
        hold || !on
    } else if released {
        !hold && on
    } else {
        on
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    bindings: Res<InputBindings>,
    mut input: ResMut<InputSnapshot>,
) {
    let mut x = 0.0;
    if keyboard.pressed(bindings.left) {
        x -= 1.0;
    }
    if keyboard.pressed(bindings.right) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(bindings.back) {
        y -= 1.0;
    }
    if keyboard.pressed(bindings.forward) {
        y += 1.0;
    }

    input.movement = Vec2::new(x, y);
    input.look = mouse_motion.delta;
    input.sprint_toggled = update_latch(
        input.sprint_toggled,
        keyboard.just_pressed(bindings.sprint),
        keyboard.just_released(bindings.sprint),
        bindings.hold_to_sprint,
    );
    input.walk_toggled = update_latch(
        input.walk_toggled,
        keyboard.just_pressed(bindings.walk),
        keyboard.just_released(bindings.walk),
        bindings.hold_to_walk,
    );
    if keyboard.just_pressed(bindings.jump) {
        input.jump_pressed = true;
    }
}

pub(crate) fn read_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<InputBindings>,
    mut actions: ResMut<ActionInput>,
) {
    if mouse.just_pressed(bindings.attack) {
        actions.press_attack();
    }
    if keyboard.just_pressed(bindings.gather) {
        actions.press_gather();
    }
}

/// Jump is visible for exactly one tick.
pub(crate) fn clear_jump(mut input: ResMut<InputSnapshot>) {
    input.jump_pressed = false;
}
