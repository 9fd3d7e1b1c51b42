//! Core building blocks: split parameters, midline crop geometry, and the
//! decode → crop → encode pipeline consumed by the entry points.
pub mod params;
pub mod processing;
