// Clippy configuration.
#![deny(clippy::all)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

pub mod catalogue;
pub mod driver;
pub mod emit;
pub mod enumerate;
pub mod error;
pub mod field;
pub mod group;
