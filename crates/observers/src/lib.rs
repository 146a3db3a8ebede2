//! Reusable observers and reports for the quadra solvers.
//!
//! # Modules
//!
//! - [`TraceObserver`] records every Catalan series term and renders a
//!   convergence table.
//! - [`Report`] renders the verbose summary of a finished solve.
//!
//! # Features
//!
//! - `plot` enables [`PlotObserver`] for visualizing series convergence via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.

mod report;
mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use report::Report;
pub use trace::{Row, Table, TraceObserver};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
