#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FsImageRepository;
pub use repository::{
    ImageAsset, ImageRepository, InMemoryImageRepository, ProblemImages, Storage, StorageError,
};
