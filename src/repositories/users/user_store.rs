//! 사용자 저장소 추상화
//!
//! 문서 저장소가 제공해야 하는 프리미티브만 정의합니다.
//! 유니크 검증을 포함한 생성, 단일 문서 조회, 도서 배열에 대한
//! 원자적 추가/제거 업데이트가 전부입니다.

use async_trait::async_trait;
use crate::domain::entities::books::saved_book::SavedBook;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    ///
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// ID로 조회. 잘못된 ObjectId 형식은 `ValidationError`.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// ID 또는 사용자명 중 하나라도 일치하는 사용자를 조회합니다.
    ///
    /// ObjectId로 해석할 수 없는 `id` 는 일치하지 않는 조건으로 취급합니다.
    /// 두 인자가 모두 없으면 `Ok(None)`.
    async fn find_by_id_or_username(
        &self,
        id: Option<&str>,
        username: Option<&str>,
    ) -> Result<Option<User>, AppError>;

    /// `book_id` 기준 집합 삽입. 이미 저장된 도서면 변경 없이 현재 사용자를 반환합니다.
    ///
    /// * `Ok(None)` - 사용자가 존재하지 않음
    async fn add_saved_book(&self, user_id: &str, book: SavedBook) -> Result<Option<User>, AppError>;

    /// `book_id` 가 일치하는 도서를 제거합니다. 없는 도서 제거는 성공(무변경)입니다.
    ///
    /// * `Ok(None)` - 사용자가 존재하지 않음
    async fn remove_saved_book(&self, user_id: &str, book_id: &str) -> Result<Option<User>, AppError>;

    /// 저장소 인덱스 준비. 애플리케이션 시작 시 한 번 호출합니다.
    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}
