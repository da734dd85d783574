// Data models
pub mod dataset;
pub mod theme;

pub use dataset::{ActivityDataset, Contribution, DatasetIndex, DateRange, IndexedYear, Year};
pub use theme::{Color, Theme, ThemeTable};
