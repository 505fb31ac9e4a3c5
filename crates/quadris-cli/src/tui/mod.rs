//! Minimal fixed-tick terminal runtime.
//!
//! [`Tui`] runs an [`App`] on top of `ratatui`: it emits a tick at a fixed
//! rate, forwards terminal events, and redraws whenever either of them may
//! have changed the state.

mod app;
mod event;
mod event_loop;
mod runner;

pub(crate) use self::{app::App, runner::Tui};
