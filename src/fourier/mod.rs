pub mod codegen;
pub mod dft;
pub mod normalize;
pub mod resample;
pub mod select;
