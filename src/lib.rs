#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod frequency;
pub mod harness;
pub mod hashmap;
pub mod key;
pub mod num;
pub mod report;
pub mod value;
