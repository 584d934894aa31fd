//! JWT 인증 토큰 클레임 구조체
use serde::{Deserialize, Serialize};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `data`: 사용자 신원 정보 `{ username, email, _id }`
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub data: AuthenticatedUser,
    pub iat: i64,
    pub exp: i64,
}
