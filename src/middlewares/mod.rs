//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - 토큰 위치: JSON 본문 `token` → 쿼리 `token` → `Authorization` 헤더
//! - 검증 성공 시 사용자 정보를 request extension에 저장
//! - 기본(Optional) 모드는 유효하지 않은 토큰을 로그만 남기고 익명으로 진행
//! - Strict 모드는 유효하지 않은 토큰을 401로 거부
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::resource("/graphql")
//!             .wrap(AuthMiddleware::new(token_service.clone(), AuthConfig::auth_mode()))
//!             .route(web::post().to(graphql_handler))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
