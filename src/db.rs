pub mod uniform_repo;
pub use uniform_repo::UniformRepository;
