pub mod repository;

pub use repository::KvPreferenceRepository;
