use crate::game::types::{FrameIntent, GameState};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

/// Radians of look rotation per pixel of mouse travel.
const MOUSE_SENSITIVITY: f32 = 0.002;

/// Discrete actions the shell handles outside the core update.
///
/// Movement and look are continuous and travel through `FrameIntent`
/// instead; this enum is only for one-shot events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Throw the current world away and build a fresh one.
    Restart,
    /// Release or recapture the mouse cursor.
    ToggleMouseCapture,
    Quit,
}

/// InputSystem translates SDL2 events into core-facing input values.
///
/// This is the input collaborator of the core: the game world never reads
/// devices, it consumes the `FrameIntent` assembled here. Discrete key
/// presses become `GameAction`s; held keys and accumulated mouse motion
/// become the per-frame intent.
pub struct InputSystem {
    /// Whether mouse look is active (relative mouse mode).
    pub mouse_captured: bool,
    jump_pressed: bool,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            mouse_captured: true,
            jump_pressed: false,
        }
    }

    /// Drains pending SDL2 events and returns the discrete actions.
    ///
    /// Jump is edge-triggered (a held space bar must not re-jump on
    /// landing), so it is latched here and consumed by `gather_intent`
    /// rather than being read from the held-key state.
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();
        self.jump_pressed = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match key {
                    Keycode::Space => self.jump_pressed = true,
                    Keycode::R => actions.push(GameAction::Restart),
                    Keycode::F => actions.push(GameAction::ToggleMouseCapture),
                    Keycode::Escape => actions.push(GameAction::Quit),
                    _ => {}
                },
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }

    /// Assembles the frame's movement and look intent.
    ///
    /// Must be called exactly once per frame after `poll_events`: reading
    /// the relative mouse state resets SDL's accumulated deltas. Outside
    /// the `Playing` state the deltas are still drained but the intent
    /// stays zeroed, so the view doesn't snap when a restart comes.
    pub fn gather_intent(&mut self, event_pump: &EventPump, state: GameState) -> FrameIntent {
        let mouse = event_pump.relative_mouse_state();
        let keyboard = event_pump.keyboard_state();
        let mut intent = FrameIntent::default();

        if state != GameState::Playing {
            return intent;
        }

        if self.mouse_captured {
            intent.yaw_delta = -(mouse.x() as f32) * MOUSE_SENSITIVITY;
            intent.pitch_delta = -(mouse.y() as f32) * MOUSE_SENSITIVITY;
        }

        if keyboard.is_scancode_pressed(Scancode::W) {
            intent.move_forward += 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::S) {
            intent.move_forward -= 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::D) {
            intent.strafe += 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::A) {
            intent.strafe -= 1.0;
        }
        intent.sprint = keyboard.is_scancode_pressed(Scancode::LShift);
        intent.jump = self.jump_pressed;

        intent
    }
}
