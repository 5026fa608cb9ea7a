//! Charts module - Chart description building and static rendering

mod description;
mod plotter;
mod renderer;

pub use description::{ChartDescription, CHART_HEIGHT};
pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderOptions};
