//! calcula: terminal calculator with operation history.
//!
//! The engine is a small pure core: an [`Operation`](model::Operation)
//! is validated operand input plus an arithmetic kind; the
//! [`Ledger`](state::Ledger) executes operations, archives rounded
//! results with timestamps, derives statistics, and renders text
//! exports. Around it sit the impure shells: the terminal menu loop in
//! [`view`], the typed web form vocabulary in [`web`], startup
//! configuration in [`config`], and file-based tracing in [`logging`].

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod view;
pub mod web;
