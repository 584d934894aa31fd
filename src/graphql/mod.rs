//! GraphQL 스키마
//!
//! ```graphql
//! type Query {
//!   me: User
//!   getSingleUser(id: ID, username: String): User
//! }
//!
//! type Mutation {
//!   createUser(username: String!, email: String!, password: String!): Auth
//!   addUser(username: String!, email: String!, password: String!): Auth
//!   login(email: String!, password: String!): Auth
//!   saveBook(bookInput: BookInput!): User
//!   deleteBook(bookId: ID!): User
//! }
//! ```
//!
//! 리졸버는 컨텍스트에서 `Arc<UserService>` 와 (있다면) 요청에 첨부된
//! `AuthenticatedUser` 를 꺼내 서비스에 넘깁니다. 실패는 `extensions.code`
//! 가 붙은 GraphQL 에러로 변환됩니다.

pub mod query;
pub mod mutation;

use std::sync::Arc;
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use crate::errors::AppResult;
use crate::services::users::UserService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type BookSearchSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(user_service: Arc<UserService>) -> BookSearchSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(user_service)
        .finish()
}

/// 서비스 결과를 nullable 루트 필드 결과로 변환
pub(crate) fn resolve<T>(result: AppResult<T>) -> async_graphql::Result<Option<T>> {
    result.map(Some).map_err(|e| e.extend())
}

#[cfg(test)]
mod tests {
    use async_graphql::{Request, Variables};
    use serde_json::{json, Value};
    use crate::repositories::users::memory_repo::MemoryUserRepository;
    use crate::services::auth::TokenService;
    use super::*;

    fn schema() -> (BookSearchSchema, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("test-secret"));
        let service = UserService::new(Arc::new(MemoryUserRepository::new()), tokens.clone(), 4);
        (build_schema(Arc::new(service)), tokens)
    }

    async fn run(schema: &BookSearchSchema, request: impl Into<Request>) -> Value {
        serde_json::to_value(schema.execute(request).await).unwrap()
    }

    fn error_code(response: &Value) -> &str {
        response["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
    }

    const SIGNUP: &str = r#"mutation {
        createUser(username: "alice", email: "a@x.com", password: "secret1") {
            token
            user { _id username email bookCount }
        }
    }"#;

    const SAVE_BOOK: &str = r#"mutation Save($book: BookInput!) {
        saveBook(bookInput: $book) { bookCount savedBooks { bookId title authors } }
    }"#;

    #[actix_web::test]
    async fn test_book_saving_scenario() {
        let (schema, tokens) = schema();

        let signup = run(&schema, SIGNUP).await;
        let token = signup["data"]["createUser"]["token"].as_str().unwrap();
        assert_eq!(signup["data"]["createUser"]["user"]["username"], "alice");
        let identity = tokens.verify(token).unwrap();

        let book = json!({ "book": { "bookId": "b1", "title": "Dune", "authors": ["Frank Herbert"] } });
        let saved = run(
            &schema,
            Request::new(SAVE_BOOK)
                .variables(Variables::from_json(book.clone()))
                .data(identity.clone()),
        ).await;
        assert_eq!(saved["data"]["saveBook"]["bookCount"], 1);

        // 같은 bookId 재저장은 무변경
        let again = run(
            &schema,
            Request::new(SAVE_BOOK)
                .variables(Variables::from_json(book))
                .data(identity.clone()),
        ).await;
        assert_eq!(again["data"]["saveBook"]["bookCount"], 1);

        let me = run(
            &schema,
            Request::new("{ me { username savedBooks { bookId } } }").data(identity.clone()),
        ).await;
        assert_eq!(me["data"]["me"]["savedBooks"], json!([{ "bookId": "b1" }]));

        let deleted = run(
            &schema,
            Request::new(r#"mutation { deleteBook(bookId: "b1") { bookCount savedBooks { bookId } } }"#)
                .data(identity),
        ).await;
        assert_eq!(deleted["data"]["deleteBook"]["bookCount"], 0);
        assert_eq!(deleted["data"]["deleteBook"]["savedBooks"], json!([]));
    }

    #[actix_web::test]
    async fn test_add_user_alias() {
        let (schema, _) = schema();

        let response = run(
            &schema,
            r#"mutation { addUser(username: "bob", email: "b@x.com", password: "pw") { user { username } } }"#,
        ).await;

        assert_eq!(response["data"]["addUser"]["user"]["username"], "bob");
    }

    #[actix_web::test]
    async fn test_login_errors_have_codes() {
        let (schema, _) = schema();
        run(&schema, SIGNUP).await;

        let wrong = run(
            &schema,
            r#"mutation { login(email: "a@x.com", password: "nope") { token } }"#,
        ).await;
        assert_eq!(error_code(&wrong), "INVALID_CREDENTIALS");
        assert_eq!(wrong["data"]["login"], Value::Null);

        let unknown = run(
            &schema,
            r#"mutation { login(email: "b@x.com", password: "secret1") { token } }"#,
        ).await;
        assert_eq!(error_code(&unknown), "NOT_FOUND");

        let empty_password = run(
            &schema,
            r#"mutation { login(email: "a@x.com", password: "") { token } }"#,
        ).await;
        assert_eq!(error_code(&empty_password), "INVALID_CREDENTIALS");

        let ok = run(
            &schema,
            r#"mutation { login(email: "A@X.com", password: "secret1") { user { username } } }"#,
        ).await;
        assert_eq!(ok["data"]["login"]["user"]["username"], "alice");
    }

    #[actix_web::test]
    async fn test_duplicate_signup_is_creation_failed() {
        let (schema, _) = schema();
        run(&schema, SIGNUP).await;

        let duplicate = run(&schema, SIGNUP).await;
        assert_eq!(error_code(&duplicate), "CREATION_FAILED");
    }

    #[actix_web::test]
    async fn test_anonymous_requests() {
        let (schema, _) = schema();

        let me = run(&schema, "{ me { username } }").await;
        assert_eq!(error_code(&me), "UNAUTHENTICATED");

        let delete = run(&schema, r#"mutation { deleteBook(bookId: "b1") { bookCount } }"#).await;
        assert_eq!(error_code(&delete), "UNAUTHENTICATED");
    }

    #[actix_web::test]
    async fn test_get_single_user() {
        let (schema, _) = schema();
        let signup = run(&schema, SIGNUP).await;
        let id = signup["data"]["createUser"]["user"]["_id"].as_str().unwrap().to_string();

        let by_id = run(
            &schema,
            format!(r#"{{ getSingleUser(id: "{}") {{ username }} }}"#, id).as_str(),
        ).await;
        assert_eq!(by_id["data"]["getSingleUser"]["username"], "alice");

        let by_name = run(&schema, r#"{ getSingleUser(username: "alice") { email } }"#).await;
        assert_eq!(by_name["data"]["getSingleUser"]["email"], "a@x.com");

        let missing = run(&schema, r#"{ getSingleUser(username: "nobody") { email } }"#).await;
        assert_eq!(error_code(&missing), "NOT_FOUND");
    }
}
