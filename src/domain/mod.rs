//! # Domain Module
//!
//! 비즈니스 도메인 타입을 정의하는 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/   ← MongoDB 문서와 1:1 대응되는 영속 엔티티 (User, SavedBook)
//! ├── models/     ← 값 객체 (인증된 사용자, 토큰 클레임, 인증 모드)
//! └── dto/        ← GraphQL 입력/출력 타입
//! ```

pub mod entities;
pub mod dto;
pub mod models;
