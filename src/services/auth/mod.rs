//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 고정 2시간 만료, 허용 오차 없음
//! - 비밀키는 환경 변수에서만 읽음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&JwtConfig::secret()?);
//! let token = token_service.sign(&identity)?;
//! let identity = token_service.verify(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
