pub mod hand;
pub mod lines;
#[allow(clippy::module_inception)]
pub mod scoring;
