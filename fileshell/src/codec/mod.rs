pub mod rle;

pub use rle::{Run, RleError, compress, decompress, expand_into, parse_runs};
