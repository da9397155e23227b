pub mod grid;
pub mod naming;
pub mod normalize;

pub use grid::reconstruct;
pub use naming::{derive_name, HeadingRule};
pub use normalize::{clean_cell, clean_text, strip_footnotes};
