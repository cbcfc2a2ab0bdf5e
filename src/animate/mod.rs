pub mod driver;
pub mod epicycle;
pub mod scene;
pub mod state;
