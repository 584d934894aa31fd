//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 찾아 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::authentication_request::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Optional/Strict)
    mode: AuthMode,
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(tokens: Arc<TokenService>, mode: AuthMode) -> Self {
        Self { mode, tokens }
    }

    /// 유효하지 않은 토큰도 익명 요청으로 통과시키는 미들웨어
    pub fn optional(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Optional)
    }

    /// 유효하지 않은 토큰을 401로 거부하는 미들웨어
    pub fn strict(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Strict)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            tokens: self.tokens.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use serde_json::{json, Value};
    use crate::domain::models::auth::authenticated_user::{AuthenticatedUser, OptionalUser};
    use super::*;

    async fn whoami(user: OptionalUser, body: web::Bytes) -> HttpResponse {
        HttpResponse::Ok().json(json!({
            "username": user.0.map(|u| u.username),
            "body_len": body.len(),
        }))
    }

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret"))
    }

    fn token_for(tokens: &TokenService, username: &str) -> String {
        tokens
            .sign(&AuthenticatedUser {
                id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
                username: username.to_string(),
                email: format!("{}@x.com", username),
            })
            .unwrap()
    }

    async fn call(middleware: AuthMiddleware, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new().service(
                web::resource("/whoami")
                    .wrap(middleware)
                    .to(whoami),
            ),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn test_no_token_is_anonymous() {
        let (status, body) = call(
            AuthMiddleware::strict(tokens()),
            test::TestRequest::get().uri("/whoami"),
        ).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], Value::Null);
    }

    #[actix_web::test]
    async fn test_header_token() {
        let tokens = tokens();
        let token = token_for(&tokens, "alice");

        let (_, body) = call(
            AuthMiddleware::optional(tokens),
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", format!("Bearer {}", token))),
        ).await;

        assert_eq!(body["username"], "alice");
    }

    #[actix_web::test]
    async fn test_query_token() {
        let tokens = tokens();
        let token = token_for(&tokens, "alice");

        let (_, body) = call(
            AuthMiddleware::optional(tokens),
            test::TestRequest::get().uri(&format!("/whoami?token={}", token)),
        ).await;

        assert_eq!(body["username"], "alice");
    }

    #[actix_web::test]
    async fn test_body_token_wins_and_body_is_restored() {
        let tokens = tokens();
        let payload = json!({ "token": token_for(&tokens, "alice"), "query": "{ me { username } }" });
        let payload_len = serde_json::to_vec(&payload).unwrap().len();

        let (_, body) = call(
            AuthMiddleware::optional(tokens.clone()),
            test::TestRequest::post()
                .uri("/whoami")
                .insert_header(("Authorization", format!("Bearer {}", token_for(&tokens, "bob"))))
                .set_json(&payload),
        ).await;

        assert_eq!(body["username"], "alice");
        assert_eq!(body["body_len"], payload_len);
    }

    #[actix_web::test]
    async fn test_invalid_token_continues_anonymous() {
        let (status, body) = call(
            AuthMiddleware::optional(tokens()),
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", "Bearer not.a.token")),
        ).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], Value::Null);
    }

    #[actix_web::test]
    async fn test_strict_mode_rejects_invalid_token() {
        let other = TokenService::new("other-secret");

        let (status, body) = call(
            AuthMiddleware::strict(tokens()),
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", format!("Bearer {}", token_for(&other, "alice")))),
        ).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid_token");
    }
}
