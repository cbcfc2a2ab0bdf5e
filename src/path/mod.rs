pub mod extract;
pub mod sample;
pub mod segment;
