//! GraphQL 쿼리 리졸버

use std::sync::Arc;
use async_graphql::{Context, Object, Result, ID};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::graphql::resolve;
use crate::services::users::UserService;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 토큰으로 인증된 현재 사용자
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<UserResponse>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(service.get_current_user(ctx.data_opt::<AuthenticatedUser>()).await)
    }

    /// ID 또는 사용자명으로 사용자 조회
    async fn get_single_user(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        username: Option<String>,
    ) -> Result<Option<UserResponse>> {
        let service = ctx.data::<Arc<UserService>>()?;

        resolve(
            service
                .get_user_by_id_or_username(id.as_ref().map(|id| id.as_str()), username.as_deref())
                .await,
        )
    }
}
