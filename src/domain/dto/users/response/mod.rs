//! # 사용자 관련 응답 DTO 모듈
//!
//! - `UserResponse` - GraphQL `User` 타입 (비밀번호 해시 제외)
//! - `AuthPayload` - GraphQL `Auth` 타입 (토큰 + 사용자)

pub mod user_response;

pub use user_response::{AuthPayload, UserResponse};
