//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: 이메일/사용자명 유니크 인덱스와 사전 중복 확인
//! - **원자적 업데이트**: 도서 추가/삭제는 `find_one_and_update` 한 번으로 처리
//! - **내장 문서**: 저장한 도서는 `saved_books` 배열에 내장

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::FutureExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::OnceCell;
use crate::{
    core::registry::{InitFuture, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::{books::saved_book::SavedBook, users::user::User},
    errors::{AppError, ErrorContext},
    repositories::users::user_store::UserStore,
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 이메일/사용자명 중복
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

/// 싱글톤 인스턴스 저장소
static USER_REPOSITORY_INSTANCE: OnceCell<Arc<UserRepository>> = OnceCell::new();

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    /// 레지스트리에 등록된 `Database` 로 만든 싱글톤 인스턴스
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `Database` 가 아직 등록되지 않음
    pub fn instance() -> Result<Arc<Self>, AppError> {
        USER_REPOSITORY_INSTANCE
            .get_or_try_init(|| -> Result<Arc<Self>, AppError> {
                Ok(Arc::new(Self::new(ServiceLocator::get::<Database>()?)))
            })
            .cloned()
    }

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION_NAME)
    }

    /// 업데이트 후 문서를 돌려받는 `find_one_and_update`
    async fn update_returning_after(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(filter, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// ObjectId 문자열 파싱
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 중복 키 쓰기 에러인지 확인
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// 아직 저장되지 않은 도서일 때만 일치하는 조건
fn unsaved_book_filter(user_id: ObjectId, book_id: &str) -> Document {
    doc! {
        "_id": user_id,
        "saved_books.book_id": { "$ne": book_id },
    }
}

fn push_book_update(book: Bson) -> Document {
    doc! {
        "$push": { "saved_books": book },
        "$set": { "updated_at": DateTime::now() },
    }
}

fn pull_book_update(book_id: &str) -> Document {
    doc! {
        "$pull": { "saved_books": { "book_id": book_id } },
        "$set": { "updated_at": DateTime::now() },
    }
}

/// `$or` 조회 조건을 구성합니다. 조건이 하나도 없으면 `None`.
fn id_or_username_filter(id: Option<&str>, username: Option<&str>) -> Option<Document> {
    let mut conditions: Vec<Document> = Vec::new();

    if let Some(object_id) = id.and_then(|id| ObjectId::parse_str(id).ok()) {
        conditions.push(doc! { "_id": object_id });
    }
    if let Some(username) = username {
        conditions.push(doc! { "username": username });
    }

    if conditions.is_empty() {
        None
    } else {
        Some(doc! { "$or": conditions })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **사용자명 유니크 인덱스** - 중복 사용자명 방지
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 중복 데이터가 있으면
    /// 유니크 인덱스 생성이 실패합니다.
    async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 새 사용자 생성
    ///
    /// 이메일과 사용자명의 중복 여부를 사전에 검증하고 저장합니다.
    /// 사전 검증과 삽입 사이의 경합은 유니크 인덱스가 막으며,
    /// 그 경우의 중복 키 에러도 `ConflictError` 로 변환합니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일 또는 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(inserted_id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id_or_username(
        &self,
        id: Option<&str>,
        username: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let Some(filter) = id_or_username_filter(id, username) else {
            return Ok(None);
        };

        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 도서 저장 (`book_id` 기준 집합 삽입)
    ///
    /// `$addToSet` 은 하위 문서 전체를 비교하므로 같은 `book_id` 라도 필드가 다르면
    /// 중복이 생깁니다. 대신 `saved_books.book_id $ne` 조건부 `$push` 를 사용하고,
    /// 조건에 걸리지 않으면 (이미 저장됨 또는 사용자 없음) 현재 문서를 다시 조회합니다.
    async fn add_saved_book(&self, user_id: &str, book: SavedBook) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(user_id)?;

        let book_bson = mongodb::bson::to_bson(&book).context("도서 직렬화 실패")?;

        let updated = self.update_returning_after(
            unsaved_book_filter(object_id, &book.book_id),
            push_book_update(book_bson),
        ).await?;

        match updated {
            Some(user) => Ok(Some(user)),
            None => {
                let current = self.find_by_id(user_id).await?;
                if current.as_ref().is_some_and(|user| user.has_saved_book(&book.book_id)) {
                    log::debug!("이미 저장된 도서: {}", book.book_id);
                }
                Ok(current)
            }
        }
    }

    async fn remove_saved_book(&self, user_id: &str, book_id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(user_id)?;

        self.update_returning_after(doc! { "_id": object_id }, pull_book_update(book_id)).await
    }
}

fn init_user_repository() -> InitFuture {
    async {
        let repo = UserRepository::instance()?;
        repo.create_indexes().await?;
        Ok::<(), AppError>(())
    }
    .boxed()
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        collection: UserRepository::COLLECTION_NAME,
        init: init_user_repository,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_with_both_conditions() {
        let oid = ObjectId::new();
        let filter = id_or_username_filter(Some(oid.to_hex().as_str()), Some("alice")).unwrap();

        let conditions = filter.get_array("$or").unwrap();
        assert_eq!(conditions.len(), 2);
    }

    #[test]
    fn test_filter_ignores_malformed_id() {
        let filter = id_or_username_filter(Some("not-an-object-id"), Some("alice")).unwrap();

        let conditions = filter.get_array("$or").unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(
            conditions[0].as_document().unwrap().get_str("username").unwrap(),
            "alice"
        );
    }

    #[test]
    fn test_filter_without_conditions() {
        assert!(id_or_username_filter(None, None).is_none());
        assert!(id_or_username_filter(Some("bad"), None).is_none());
    }

    #[test]
    fn test_unsaved_book_filter() {
        let oid = ObjectId::new();
        let filter = unsaved_book_filter(oid, "b1");

        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
        let guard = filter.get_document("saved_books.book_id").unwrap();
        assert_eq!(guard.get_str("$ne").unwrap(), "b1");
    }

    #[test]
    fn test_push_book_update() {
        let book = SavedBook {
            book_id: "b1".to_string(),
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            description: String::new(),
            image: None,
            link: None,
        };
        let update = push_book_update(mongodb::bson::to_bson(&book).unwrap());

        let pushed = update.get_document("$push").unwrap().get_document("saved_books").unwrap();
        assert_eq!(pushed.get_str("book_id").unwrap(), "b1");
        assert!(update.get_document("$set").unwrap().get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_pull_book_update() {
        let update = pull_book_update("b1");

        let pulled = update.get_document("$pull").unwrap().get_document("saved_books").unwrap();
        assert_eq!(pulled.get_str("book_id").unwrap(), "b1");
        assert!(update.get_document("$set").unwrap().get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id(&ObjectId::new().to_hex()).is_ok());
        assert!(matches!(parse_object_id("xyz"), Err(AppError::ValidationError(_))));
    }
}
