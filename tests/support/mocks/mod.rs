// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;
pub mod upload;
pub mod util;

pub use repos::{CountingPostRead, InMemoryCategoryRepo, InMemoryPostRepo, Store};
pub use time::fixed_now;
pub use upload::{FailingUploader, RecordingUploader};
pub use util::{DummyClock, DummySlug};
