//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 패스워드 해싱, Rate Limiting, CORS 설정
//! - [`auth_config`] - JWT 비밀키, 토큰 유효 시간, 인증 미들웨어 모드
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3001"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="googlebooks"
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export BCRYPT_COST="10"            # 4-15 범위
//! export AUTH_STRICT_TOKENS="false"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```
//!
//! 민감한 값은 환경 변수로만 제공하며, 비밀키에는 기본값이 없습니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
