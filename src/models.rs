pub mod navigation;
pub mod notice;
pub mod options;
pub mod uniform;
