//! # 사용자 관련 요청 DTO 모듈
//!
//! 리졸버 인자를 구조화된 타입으로 묶고 `validator` 로 형식을 검증합니다.
//! 검증 실패는 서비스 계층에서 도메인 에러로 변환됩니다.

pub mod create_user_request;
pub mod auth_request;

pub use create_user_request::CreateUserRequest;
pub use auth_request::LoginRequest;
