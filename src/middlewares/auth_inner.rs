//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;
        let tokens = self.tokens.clone();

        Box::pin(async move {
            let credential = find_credential(&mut req).await?;

            if let Some(token) = credential {
                match (tokens.verify(&token), mode) {
                    (Ok(user), _) => {
                        log::debug!("인증 성공: 사용자 {}", user.username);
                        req.extensions_mut().insert(user);
                    }
                    // Strict 모드에서는 위조/만료 토큰을 바로 거부
                    (Err(err), AuthMode::Strict) => {
                        log::warn!("인증 실패, 요청 거부: {}", err);
                        let response = err.error_response();
                        let (req, _) = req.into_parts();
                        return Ok(ServiceResponse::new(req, response).map_into_right_body());
                    }
                    // 익명 요청으로 진행, 인증이 필요한 리졸버가 거부한다
                    (Err(err), AuthMode::Optional) => {
                        log::warn!("유효하지 않은 토큰, 익명으로 진행: {}", err);
                    }
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// 요청에서 토큰 문자열을 찾습니다.
///
/// 우선순위: JSON 본문의 `token` 필드, 쿼리 파라미터 `token`, `Authorization` 헤더.
async fn find_credential(req: &mut ServiceRequest) -> Result<Option<String>, Error> {
    if let Some(token) = token_from_body(req).await? {
        return Ok(Some(token));
    }

    let from_query = web::Query::<TokenQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().token);
    if let Some(token) = from_query.as_deref().and_then(TokenService::extract_bearer_token) {
        return Ok(Some(token.to_string()));
    }

    Ok(req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
        .map(str::to_string))
}

/// JSON 본문을 버퍼링해 `token` 필드를 읽고, 본문은 다음 핸들러를 위해 되돌려 놓습니다.
async fn token_from_body(req: &mut ServiceRequest) -> Result<Option<String>, Error> {
    if req.content_type() != JSON_CONTENT_TYPE {
        return Ok(None);
    }

    let body = req.extract::<web::Bytes>().await?;
    let token = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("token")
                .and_then(|t| t.as_str())
                .and_then(TokenService::extract_bearer_token)
                .map(str::to_string)
        });

    req.set_payload(bytes_to_payload(body));
    Ok(token)
}

fn bytes_to_payload(buf: web::Bytes) -> Payload {
    let (_, mut payload) = actix_http::h1::Payload::create(true);
    payload.unread_data(buf);
    Payload::from(payload)
}
