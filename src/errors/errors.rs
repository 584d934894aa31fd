//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고, 두 개의 전송 계층에 맞춰 변환합니다.
//!
//! - `actix_web::ResponseError` - 미들웨어가 전송 계층에서 거부할 때의 HTTP 응답
//! - `async_graphql::ErrorExtensions` - GraphQL 응답의 `extensions.code` 매핑
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn me(identity: Option<&AuthenticatedUser>) -> Result<User, AppError> {
//!     let identity = identity.ok_or(AppError::NotAuthenticated)?;
//!
//!     user_store.find_by_id(&identity.id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 리졸버가 그대로 클라이언트에게 노출하는 요청 단위의 실패들과,
/// 저장소/내부 오류를 함께 표현합니다. 재시도는 하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 인증이 필요한 작업에 신원 정보가 없음 (401 Unauthorized)
    #[error("Not authenticated: 로그인이 필요합니다")]
    NotAuthenticated,

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("Invalid credentials: 비밀번호가 올바르지 않습니다")]
    InvalidCredentials,

    /// 토큰 서명 불일치, 손상, 만료 (401 Unauthorized)
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소가 쓰기를 거부함 - 검증 실패, 중복 키 (400 Bad Request)
    #[error("Creation failed: {0}")]
    CreationFailed(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// GraphQL `extensions.code` 에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotAuthenticated | AppError::InvalidCredential(_) => "UNAUTHENTICATED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::CreationFailed(_) => "CREATION_FAILED",
            AppError::ValidationError(_) => "BAD_USER_INPUT",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP 에러 응답 본문의 `error` 값
    pub fn error_kind(&self) -> &'static str {
        match self {
            AppError::NotAuthenticated => "not_authenticated",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidCredential(_) => "invalid_token",
            AppError::NotFound(_) => "not_found",
            AppError::CreationFailed(_) => "creation_failed",
            AppError::ValidationError(_) => "bad_request",
            AppError::ConflictError(_) => "conflict",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::NotAuthenticated
            | AppError::InvalidCredentials
            | AppError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::CreationFailed(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.error_kind(),
                "message": self.to_string()
            }))
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        // 내부 오류 상세는 로그에만 남긴다
        let message = match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("리졸버 내부 오류: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
