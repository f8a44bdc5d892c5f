pub mod subconverter;

pub use subconverter::{convert, Conversion};
