//! GraphQL 뮤테이션 리졸버

use std::sync::Arc;
use async_graphql::{Context, Object, Result, ID};
use crate::domain::dto::books::BookInput;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::domain::dto::users::response::{AuthPayload, UserResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::graphql::resolve;
use crate::services::users::UserService;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// 회원가입 후 토큰 발급
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<Option<AuthPayload>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(
            service
                .create_user(CreateUserRequest::new(&username, &email, &password))
                .await,
        )
    }

    /// `createUser` 와 동일
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<Option<AuthPayload>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(
            service
                .create_user(CreateUserRequest::new(&username, &email, &password))
                .await,
        )
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<Option<AuthPayload>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(service.login(LoginRequest::new(&email, &password)).await)
    }

    /// 현재 사용자의 저장 목록에 도서 추가
    async fn save_book(
        &self,
        ctx: &Context<'_>,
        book_input: BookInput,
    ) -> Result<Option<UserResponse>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(
            service
                .save_book(ctx.data_opt::<AuthenticatedUser>(), book_input)
                .await,
        )
    }

    /// 현재 사용자의 저장 목록에서 도서 제거
    async fn delete_book(&self, ctx: &Context<'_>, book_id: ID) -> Result<Option<UserResponse>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(
            service
                .delete_book(ctx.data_opt::<AuthenticatedUser>(), &book_id)
                .await,
        )
    }
}
