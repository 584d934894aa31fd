//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 인증 미들웨어 동작에 관련된 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # JWT 서명 비밀키 (둘 중 하나는 반드시 설정)
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export SECRET_KEY="your-super-secret-jwt-key"   # 레거시 이름
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! # 위조/만료 토큰을 전송 계층에서 바로 거부 (기본값: false)
//! export AUTH_STRICT_TOKENS="true"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthConfig, JwtConfig};
//!
//! // 시작 시점에 한 번 읽어서 TokenService에 넘긴다
//! let secret = JwtConfig::secret()?;
//! let token_service = TokenService::new(&secret);
//!
//! let mode = AuthConfig::auth_mode();
//! ```

use std::env;
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::errors::AppError;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 유효 시간 (시간 단위). 모든 발급 경로에서 고정값을 사용합니다.
    pub const EXPIRATION_HOURS: i64 = 2;

    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// `JWT_SECRET`을 우선 확인하고, 없으면 `SECRET_KEY`를 사용합니다.
    /// 소스 코드에 내장된 기본값은 없으며, 두 변수가 모두 비어 있으면
    /// 시작 단계에서 실패해야 합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 비밀키가 설정되지 않음
    pub fn secret() -> Result<String, AppError> {
        Self::resolve_secret(env::var("JWT_SECRET").ok(), env::var("SECRET_KEY").ok())
    }

    /// 두 후보 값 중 공백이 아닌 첫 번째 비밀키를 고릅니다. 값은 설정 그대로 사용합니다.
    pub fn resolve_secret(
        jwt_secret: Option<String>,
        secret_key: Option<String>,
    ) -> Result<String, AppError> {
        [jwt_secret, secret_key]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::InternalError(
                    "JWT_SECRET (또는 SECRET_KEY) 환경 변수가 설정되지 않았습니다".to_string(),
                )
            })
    }

    /// 토큰 유효 시간을 초 단위로 반환합니다.
    pub fn expiration_seconds() -> i64 {
        Self::EXPIRATION_HOURS * 3600
    }
}

/// 인증 미들웨어 설정
pub struct AuthConfig;

impl AuthConfig {
    /// 미들웨어 인증 모드를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_STRICT_TOKENS`: `true`/`1`/`yes` 이면 [`AuthMode::Strict`]
    ///
    /// 기본값은 [`AuthMode::Optional`] 로, 유효하지 않은 토큰은 로그만 남기고
    /// 익명 요청으로 처리합니다.
    pub fn auth_mode() -> AuthMode {
        Self::auth_mode_from(env::var("AUTH_STRICT_TOKENS").ok().as_deref())
    }

    pub fn auth_mode_from(value: Option<&str>) -> AuthMode {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "true" || v == "1" || v == "yes" => AuthMode::Strict,
            _ => AuthMode::Optional,
        }
    }
}
