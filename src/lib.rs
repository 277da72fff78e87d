//! **swaycycle** — cycle focus through the visible windows of the current
//! sway workspace.
//!
//! Each invocation fetches sway's tree, collects the windows shown on the
//! active workspace in on-screen order, and focuses the one after (or
//! before) the currently focused window, wrapping around at the ends.
//!
//! # Architecture
//!
//! The crate is organised around one core trait:
//!
//! * [`traits::WindowManager`] — "fetch the tree" and "run a command", so
//!   the tree walk and the selection are not coupled to any transport.
//!
//! Concrete implementations live in [`sway`]: the native IPC socket
//! ([`sway::ipc::SwayIpc`]) and the `swaymsg` helper
//! ([`sway::swaymsg::Swaymsg`]).  [`visible`] walks the tree,
//! [`selector`] picks the neighbour and [`switcher`] drives the whole
//! exchange.

pub mod command;
pub mod config;
pub mod selector;
pub mod sway;
pub mod switcher;
pub mod traits;
pub mod tree;
pub mod visible;
