use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 신원 정보
///
/// 토큰 페이로드(`data`)에 그대로 직렬화되므로 필드 이름이 곧 클레임 이름입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    pub email: String,
}

/// 선택적 인증 사용자 추출자
///
/// 인증 미들웨어가 요청 확장에 넣어 둔 신원 정보를 꺼냅니다.
/// 토큰이 없거나 유효하지 않았다면 `None` 입니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
