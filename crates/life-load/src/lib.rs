//! Starting boards for life-core: pattern tables, presets, random soups.

mod error;
pub mod presets;
pub mod soup;
pub mod table;

pub use error::LoadError;
pub use presets::{PRESETS, Preset, preset};
pub use soup::{random_cells, random_grid};
pub use table::{ALIVE_TOKENS, LoadOptions, load_file, parse_grid, parse_table};
