//! 도서 검색 백엔드
//!
//! 도서 검색 앱을 위한 GraphQL 백엔드입니다.
//! 사용자는 가입/로그인 후 외부 카탈로그에서 찾은 도서를 자신의 프로필에
//! 저장하거나 삭제할 수 있습니다.
//!
//! # Features
//!
//! - **GraphQL API**: `me`, `getSingleUser`, `createUser`, `login`, `saveBook`, `deleteBook`
//! - **JWT 인증**: 2시간 유효한 HS256 토큰, 본문/쿼리/헤더에서 추출
//! - **MongoDB**: 사용자 문서에 저장한 도서를 내장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /graphql, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 토큰 검증, 사용자 정보 첨부
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GraphQL Schema  │ ← 쿼리/뮤테이션 리졸버
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use book_search_backend::core::registry::ServiceLocator;
//! use book_search_backend::services::users::UserService;
//!
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let user_service = UserService::instance()?;
//! let auth = user_service.login(LoginRequest::new("a@x.com", "secret1")).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod graphql;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
