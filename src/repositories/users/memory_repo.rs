//! 테스트용 메모리 사용자 저장소
//!
//! MongoDB 구현과 같은 규칙(유니크 제약, 집합 삽입, 무변경 제거)을 따릅니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::entities::{books::saved_book::SavedBook, users::user::User},
    errors::AppError,
    repositories::users::user_store::UserStore,
};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 실패".to_string()))
    }

    /// 사용자 문서에 변경을 적용하고 변경 후 문서를 반환합니다.
    fn update<F>(&self, user_id: &str, apply: F) -> Result<Option<User>, AppError>
    where
        F: FnOnce(&mut User),
    {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut users = self.write()?;
        let Some(user) = users.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(None);
        };

        apply(user);
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        Ok(self.read()?.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id_or_username(
        &self,
        id: Option<&str>,
        username: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let object_id = id.and_then(|id| ObjectId::parse_str(id).ok());

        Ok(self.read()?
            .iter()
            .find(|u| {
                (object_id.is_some() && u.id == object_id)
                    || username.is_some_and(|name| u.username == name)
            })
            .cloned())
    }

    async fn add_saved_book(&self, user_id: &str, book: SavedBook) -> Result<Option<User>, AppError> {
        self.update(user_id, |user| {
            if !user.has_saved_book(&book.book_id) {
                user.saved_books.push(book);
                user.updated_at = DateTime::now();
            }
        })
    }

    async fn remove_saved_book(&self, user_id: &str, book_id: &str) -> Result<Option<User>, AppError> {
        self.update(user_id, |user| {
            user.saved_books.retain(|b| b.book_id != book_id);
            user.updated_at = DateTime::now();
        })
    }
}
