//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 사용자 조회, 도서 저장/삭제의 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일/사용자명 중복 방지
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store, token_service, PasswordConfig::bcrypt_cost());
//! let auth = user_service
//!     .create_user(CreateUserRequest::new("alice", "a@x.com", "secret1"))
//!     .await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
