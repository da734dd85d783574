//! # contrib-canvas
//!
//! Renders GitHub-style contribution charts from a dataset of daily counts:
//!
//! - a calendar heatmap, one block of weekly columns per year
//! - a line chart of per-year totals
//!
//! Both charts draw through the [`Surface`] trait. [`RasterSurface`] paints into
//! an RGBA image and encodes PNG; [`RecordingSurface`] keeps a log of draw calls.
//!
//! ## Example
//!
//! ```no_run
//! use contrib_canvas::{render_heatmap, ActivityDataset, RasterSurface, RenderOptions, ThemeTable};
//!
//! let json = std::fs::read_to_string("contributions.json")?;
//! let data = ActivityDataset::from_json(&json)?;
//! let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin()).theme_name("githubDark");
//!
//! let mut surface = RasterSurface::new();
//! surface.load_font("IBM Plex Mono", "IBMPlexMono-Regular.ttf")?;
//! render_heatmap(&mut surface, &options)?;
//! surface.save_png("heatmap.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod charts;
pub mod error;
pub mod models;
pub mod surface;
pub mod utils;

pub use charts::{render_heatmap, render_trend_line, RenderOptions};
pub use error::{ChartError, Result};
pub use models::{ActivityDataset, Contribution, Theme, ThemeTable, Year};
pub use surface::{RasterSurface, RecordingSurface, Surface};
