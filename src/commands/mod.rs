pub mod upstream;

pub use upstream::*;
