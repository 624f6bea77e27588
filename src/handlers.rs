pub mod pages;
pub mod uniforms;
