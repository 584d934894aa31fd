//! # Domain Models Module
//!
//! 영속되지 않는 값 객체들을 정의합니다.
//!
//! - [`auth`] - 요청에 첨부되는 인증된 사용자 정보, 미들웨어 인증 모드
//! - [`token`] - JWT 클레임 구조

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
