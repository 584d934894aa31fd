//! GraphQL 엔드포인트 핸들러

use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use crate::domain::models::auth::authenticated_user::OptionalUser;
use crate::graphql::BookSearchSchema;

/// GraphQL 요청 실행
///
/// 미들웨어가 첨부한 사용자 정보가 있으면 요청 컨텍스트에 넣습니다.
///
/// # Endpoint
/// `POST /graphql`
pub async fn graphql_handler(
    schema: web::Data<BookSearchSchema>,
    user: OptionalUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(user) = user.0 {
        request = request.data(user);
    }

    schema.execute(request).await.into()
}

/// GraphiQL 탐색기
///
/// # Endpoint
/// `GET /graphql`
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
