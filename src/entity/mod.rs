pub mod build;

pub use build::{BuildType, Status};
