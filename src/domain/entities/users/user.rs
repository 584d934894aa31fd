//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장한 도서 목록을 내장 배열로 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::books::saved_book::SavedBook;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 사용자 엔티티
///
/// `username` 과 `email` 은 각각 전역적으로 유니크하며 (유니크 인덱스),
/// 비밀번호는 bcrypt 해시로만 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 저장한 도서 목록 (삽입 순서 유지, `book_id` 기준 중복 없음)
    #[serde(default)]
    pub saved_books: Vec<SavedBook>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성. 저장 전이므로 ID는 비어 있습니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            saved_books: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장한 도서 수
    pub fn book_count(&self) -> usize {
        self.saved_books.len()
    }

    pub fn has_saved_book(&self, book_id: &str) -> bool {
        self.saved_books.iter().any(|book| book.book_id == book_id)
    }

    /// 토큰에 담을 신원 정보. 저장되지 않은 사용자는 `None`.
    pub fn identity(&self) -> Option<AuthenticatedUser> {
        self.id_string().map(|id| AuthenticatedUser {
            id,
            username: self.username.clone(),
            email: self.email.clone(),
        })
    }
}
