//! Keyboard input model.
//!
//! Physical [`Key`]s are bound to logical [`Control`]s (two keys per
//! movement direction). The engine only ever asks about controls through
//! the [`InputSource`] trait; [`InputState`] is the stock implementation,
//! fed by whatever windowing or scripting layer drives the game.

use serde::{Deserialize, Serialize};

/// Physical keys the game listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    KeyA,
    KeyD,
    Space,
    Escape,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowUp,
        Key::KeyA,
        Key::KeyD,
        Key::Space,
        Key::Escape,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Logical game controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Left,
    Right,
    Shoot,
    Exit,
}

impl Control {
    /// Keys bound to this control.
    pub fn keys(self) -> &'static [Key] {
        match self {
            Control::Left => &[Key::ArrowLeft, Key::KeyA],
            Control::Right => &[Key::ArrowRight, Key::KeyD],
            Control::Shoot => &[Key::Space, Key::ArrowUp],
            Control::Exit => &[Key::Escape],
        }
    }
}

/// Source of per-tick control state.
pub trait InputSource {
    /// Whether any key bound to `control` is held.
    fn is_down(&self, control: Control) -> bool;

    /// Whether any key bound to `control` went down since the last `end_frame`.
    fn just_pressed(&self, control: Control) -> bool;

    /// Clear edge-triggered state. Called once at the end of every tick.
    fn end_frame(&mut self);
}

const KEY_COUNT: usize = Key::ALL.len();

/// Held and just-pressed key sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
    released: [bool; KEY_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat of a held key does not re-trigger a press.
    pub fn press(&mut self, key: Key) {
        if !self.held[key.slot()] {
            self.pressed[key.slot()] = true;
        }
        self.held[key.slot()] = true;
    }

    /// Key went up.
    pub fn release(&mut self, key: Key) {
        self.held[key.slot()] = false;
        self.released[key.slot()] = true;
    }

    /// Release every held key.
    pub fn release_all(&mut self) {
        for key in Key::ALL {
            if self.held[key.slot()] {
                self.release(key);
            }
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    pub fn key_just_pressed(&self, key: Key) -> bool {
        self.pressed[key.slot()]
    }

    pub fn key_just_released(&self, key: Key) -> bool {
        self.released[key.slot()]
    }
}

impl InputSource for InputState {
    fn is_down(&self, control: Control) -> bool {
        control.keys().iter().any(|&k| self.is_key_down(k))
    }

    fn just_pressed(&self, control: Control) -> bool {
        control.keys().iter().any(|&k| self.key_just_pressed(k))
    }

    fn end_frame(&mut self) {
        self.pressed = [false; KEY_COUNT];
        self.released = [false; KEY_COUNT];
    }
}
