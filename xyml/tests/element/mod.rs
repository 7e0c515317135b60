//! Element API scenarios over a parsed document

mod mutation;
mod navigation;
