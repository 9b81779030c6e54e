//! Reusable observers for the descent line-search minimizers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing the right capabilities.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasIteration`], [`HasPoint`], [`HasObjective`], [`CanStopEarly`])
//! - [`progress`] — [`ProgressLog`], which reports each iteration via `tracing`
//! - [`contour`] — Level curves of a two-variable objective, for path plots
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver behavior via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: descent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasPoint`]: traits::HasPoint
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod contour;
pub mod progress;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use progress::ProgressLog;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
