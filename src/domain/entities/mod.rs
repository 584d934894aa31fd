//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티들을 정의합니다.
//!
//! - [`users::user::User`] - `users` 컬렉션의 문서
//! - [`books::saved_book::SavedBook`] - 사용자 문서에 내장되는 저장된 도서
//!
//! 도서는 별도 컬렉션 없이 `User.saved_books` 배열에 내장됩니다.
//! 사용자 단위의 단일 문서 업데이트만으로 저장/삭제가 원자적으로 처리됩니다.

pub mod users;
pub mod books;

pub use users::*;
pub use books::*;
