// src/infrastructure/uploads/mod.rs
mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryUploader};
