//! Data models for the Books API

pub mod book;
pub mod pagination;

pub use book::{Book, BookPayload};
pub use pagination::PageRequest;
