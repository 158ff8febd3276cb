//! # Shoremap Render
//!
//! Map composition for shoremap.
//!
//! The main entry point is [`MapRenderer`]: an explicit render context
//! owning the canvas, the projection and the collected legend entries for
//! one render pass. On top of a basemap background it draws, in order,
//! site polygon fills, point markers, the scale bar, the north arrow and
//! the legend, then saves the result in the format implied by the output
//! path extension.
//!
//! ## Usage
//!
//! ```ignore
//! use shoremap_render::{MapRenderer, MapStyle};
//!
//! let mut renderer = MapRenderer::new(bbox, MapStyle::default())?;
//! renderer.set_background(basemap);
//! renderer.draw_layers(&tables, "Seagrass bed", "Survey points")?;
//! renderer.draw_scale_bar();
//! renderer.draw_north_arrow();
//! renderer.draw_legend();
//! renderer.save("map.png")?;
//! ```

pub mod color;
pub mod error;
pub mod layers;
pub mod legend;
pub mod north_arrow;
pub mod renderer;
pub mod scalebar;
pub mod style;
pub mod text;

pub use color::Color;
pub use error::{RenderError, Result};
pub use layers::closed_trace;
pub use legend::{LegendEntry, SeriesKind};
pub use renderer::MapRenderer;
pub use scalebar::scale_anchor;
pub use style::{Corner, MapStyle, ScaleUnits};
pub use text::Labeller;
