//! Small helpers shared by the report generators

pub mod string;
