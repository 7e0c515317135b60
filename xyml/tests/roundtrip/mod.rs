//! Fixture documents through every format pair

mod json;
mod xml;
mod xyml;
