//! modalkey - a modal (vim-style) keystroke interpreter core
//!
//! Hosts feed keystrokes in through [`Controller::type_key`] (or the
//! text-based [`Controller::type_text`] hook) and apply the returned
//! [`Effect`]s: edit requests, cursor moves, selections, yanked text,
//! and host-command descriptors. The interpreter owns mode, counts,
//! pending operators, and the mapping table; the host owns the buffer,
//! the cursor, and all rendering.

pub mod action;
pub mod buffer;
pub mod config;
pub mod controller;
pub mod error;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod movement;
pub mod operator;
pub mod status;

pub use action::{Action, HostCommand, ModeSwitch};
pub use buffer::{BufferEdit, BufferView, Position, Range, RangeKind, VecBuffer};
pub use config::Settings;
pub use controller::{Controller, Effect, KeyOutcome};
pub use error::KeymapError;
pub use key::Key;
pub use keymap::{KeyMap, MapContext};
pub use mode::{CursorStyle, Mode};
pub use movement::{FindKind, Motion, MotionTarget};
pub use operator::Operator;
