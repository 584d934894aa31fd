//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (React 도서 검색 앱)
//! └─────────────────────┬───────────────────────┘
//!                       │ POST /graphql
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 토큰 → AuthenticatedUser
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - GraphQL 요청 실행
//! ├─────────────────────────────────────────────┤
//!   GraphQL 리졸버 → UserService → UserStore
//! └─────────────────────────────────────────────┘
//! ```

pub mod graphql;
