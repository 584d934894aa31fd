//! # Data Transfer Objects
//!
//! GraphQL 스키마에 노출되는 입력/출력 타입입니다.
//! 엔티티를 그대로 노출하지 않고, 비밀번호 해시 같은 민감 정보를 제외한
//! 응답 타입으로 변환합니다.

pub mod users;
pub mod books;

pub use users::*;
pub use books::*;
