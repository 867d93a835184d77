pub extern crate euclid;
pub extern crate num_traits;
#[cfg(feature = "text")]
pub extern crate ttf_parser;

pub mod command;
pub mod conic;
pub mod error;
pub mod path;
pub mod polynomial;
pub mod scalar;
pub mod shape;
#[cfg(feature = "text")]
pub mod text;
pub mod utils;
