//! 저장된 도서 엔티티 모듈

pub mod saved_book;

pub use saved_book::SavedBook;
