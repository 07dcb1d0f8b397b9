pub mod rules;
pub mod sort;
pub mod strip;
