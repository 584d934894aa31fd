use async_graphql::{SimpleObject, ID};
use crate::domain::dto::books::BookResponse;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO (GraphQL `User`)
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserResponse {
    #[graphql(name = "_id")]
    pub id: ID,
    pub username: String,
    pub email: String,
    /// 저장한 도서 수
    pub book_count: i32,
    pub saved_books: Vec<BookResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let book_count = i32::try_from(user.book_count()).unwrap_or(i32::MAX);
        let User {
            id,
            username,
            email,
            saved_books,
            ..
        } = user;

        Self {
            id: ID(id.map(|id| id.to_hex()).unwrap_or_default()),
            username,
            email,
            book_count,
            saved_books: saved_books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

/// 토큰 발급 응답 DTO (GraphQL `Auth`)
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Auth")]
pub struct AuthPayload {
    pub token: ID,
    pub user: UserResponse,
}

impl AuthPayload {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token: ID(token),
            user: UserResponse::from(user),
        }
    }
}
