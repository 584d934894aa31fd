//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main` 에서 한 번 생성되어 `Arc` 로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = Arc::new(TokenService::new(&JwtConfig::secret()?));
//! let user_service = Arc::new(UserService::new(store, token_service.clone(), cost));
//! ```

pub mod users;
pub mod auth;
