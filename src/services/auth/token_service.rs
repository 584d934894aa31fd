//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 신원 정보 `{ username, email, _id }` 를 담은 HS256 토큰을
//! 발급하고 검증합니다. 토큰은 상태가 없으며 서버에 저장하지 않습니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use futures_util::future::FutureExt;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use crate::{
    config::JwtConfig,
    core::registry::{InitFuture, ServiceRegistration},
    domain::models::{auth::authenticated_user::AuthenticatedUser, token::token::TokenClaims},
    errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// 서명 비밀키는 시작 시점에 설정에서 한 번 읽어 키 쌍으로 보관하며,
/// 프로세스가 끝날 때까지 변경되지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

/// 싱글톤 인스턴스 저장소
static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    /// 환경 변수의 비밀키로 만든 싱글톤 인스턴스
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET` / `SECRET_KEY` 미설정
    pub fn instance() -> Result<Arc<Self>, AppError> {
        TOKEN_SERVICE_INSTANCE
            .get_or_try_init(|| JwtConfig::secret().map(|secret| Arc::new(Self::new(&secret))))
            .cloned()
    }

    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 사용자 신원 정보로 액세스 토큰 생성
    ///
    /// 유효 시간은 [`JwtConfig::EXPIRATION_HOURS`] 로 고정입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let identity = user.identity().ok_or(...)?;
    /// let token = token_service.sign(&identity)?;
    /// ```
    pub fn sign(&self, identity: &AuthenticatedUser) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::EXPIRATION_HOURS);

        self.encode_claims(&TokenClaims {
            data: identity.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 신원 정보 추출
    ///
    /// 서명 불일치, 구조 손상, 만료(허용 오차 없음)는 모두 실패입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredential` - 만료, 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims.data)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::InvalidCredential("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::InvalidCredential("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::InvalidCredential(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// 공백으로 나눈 마지막 조각을 토큰으로 사용하므로 `Bearer {token}` 과
    /// 스킴 없이 토큰만 온 경우를 모두 받습니다. 비어 있거나 스킴만 있으면
    /// `None` 으로, 익명 요청으로 처리됩니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(TokenService::extract_bearer_token("Bearer abc"), Some("abc"));
    /// assert_eq!(TokenService::extract_bearer_token("abc"), Some("abc"));
    /// ```
    pub fn extract_bearer_token(header: &str) -> Option<&str> {
        let header = header.trim();
        if header.eq_ignore_ascii_case("bearer") {
            return None;
        }

        header
            .rsplit(char::is_whitespace)
            .next()
            .filter(|token| !token.is_empty())
    }
}

fn init_token_service() -> InitFuture {
    async { TokenService::instance().map(|_| ()) }.boxed()
}

inventory::submit! {
    ServiceRegistration {
        name: "token_service",
        init: init_token_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> AuthenticatedUser {
        AuthenticatedUser {
            id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let service = TokenService::new("test-secret");
        let token = service.sign(&identity()).unwrap();

        assert_eq!(service.verify(&token).unwrap(), identity());
    }

    #[test]
    fn test_claims_have_two_hour_validity() {
        let service = TokenService::new("test-secret");
        let token = service.sign(&identity()).unwrap();

        let claims = decode::<TokenClaims>(&token, &service.decoding_key, &service.validation)
            .unwrap()
            .claims;
        assert_eq!(claims.exp - claims.iat, JwtConfig::expiration_seconds());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = TokenService::new("test-secret");
        let token = service.sign(&identity()).unwrap();

        // 서명 부분의 첫 글자를 바꾼다
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", head, chars.into_iter().collect::<String>());

        assert!(matches!(service.verify(&tampered), Err(AppError::InvalidCredential(_))));
        assert!(matches!(service.verify("not.a.token"), Err(AppError::InvalidCredential(_))));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = TokenService::new("other-secret").sign(&identity()).unwrap();
        let service = TokenService::new("test-secret");

        assert!(matches!(service.verify(&token), Err(AppError::InvalidCredential(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test-secret");
        let issued = Utc::now() - Duration::hours(3);
        let token = service.encode_claims(&TokenClaims {
            data: identity(),
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(JwtConfig::EXPIRATION_HOURS)).timestamp(),
        }).unwrap();

        assert!(matches!(service.verify(&token), Err(AppError::InvalidCredential(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("bearer abc.def"), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("abc.def"), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("Bearer  abc.def "), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("Bearer a b"), Some("b"));
        assert_eq!(TokenService::extract_bearer_token("Bearer "), None);
        assert_eq!(TokenService::extract_bearer_token(""), None);
    }
}
