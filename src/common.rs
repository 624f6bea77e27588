pub mod action_utils;
pub mod error;
