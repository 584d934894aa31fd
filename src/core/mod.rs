//! # Core Framework Module
//!
//! 싱글톤 컴포넌트 레지스트리를 제공합니다.
//!
//! | 구성 요소 | 역할 |
//! |-----------|------|
//! | `ServiceLocator` | 인프라 컴포넌트(`Database`) 보관 |
//! | `ServiceRegistration` / `RepositoryRegistration` | 시작 시 초기화할 싱글톤 목록 |
//!
//! 각 서비스/리포지토리는 `instance()` 로 자신의 싱글톤을 돌려주고,
//! `inventory::submit!` 으로 초기화 함수를 등록합니다.

pub mod registry;

pub use registry::*;
