//! 도서 관련 DTO
//!
//! 클라이언트는 외부 카탈로그 검색 결과를 이미 정규화된 형태
//! (`bookId`, `title`, `authors`, `description`, `image`, `link`)로 전달합니다.

use async_graphql::{InputObject, SimpleObject};
use validator::{Validate, ValidationError};
use crate::domain::entities::books::saved_book::SavedBook;
use crate::utils::string_utils::{clean_optional_string, trim_string};

/// 도서 저장 입력 (GraphQL `BookInput`)
///
/// `bookId` 와 `title` 은 앞뒤 공백을 제거한 뒤 저장되므로, 검증도
/// 공백만 있는 값을 빈 값으로 취급합니다.
#[derive(Debug, Clone, Validate, InputObject)]
#[graphql(name = "BookInput")]
pub struct BookInput {
    #[validate(custom(function = "validate_book_id"))]
    pub book_id: String,

    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[graphql(default)]
    pub authors: Vec<String>,

    pub description: Option<String>,

    /// 표지 이미지 URL
    pub image: Option<String>,

    /// 카탈로그 상세 페이지 링크
    pub link: Option<String>,
}

fn validate_book_id(book_id: &str) -> Result<(), ValidationError> {
    require_non_blank(book_id, "bookId가 필요합니다")
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    require_non_blank(title, "도서 제목이 필요합니다")
}

fn require_non_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(message.into()));
    }
    Ok(())
}

impl From<BookInput> for SavedBook {
    fn from(input: BookInput) -> Self {
        Self {
            book_id: trim_string(&input.book_id),
            title: trim_string(&input.title),
            authors: input
                .authors
                .iter()
                .map(|author| trim_string(author))
                .filter(|author| !author.is_empty())
                .collect(),
            description: clean_optional_string(input.description).unwrap_or_default(),
            image: clean_optional_string(input.image),
            link: clean_optional_string(input.link),
        }
    }
}

/// 저장된 도서 응답 (GraphQL `Book`)
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Book")]
pub struct BookResponse {
    pub book_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl From<SavedBook> for BookResponse {
    fn from(book: SavedBook) -> Self {
        Self {
            book_id: book.book_id,
            title: book.title,
            authors: book.authors,
            description: book.description,
            image: book.image,
            link: book.link,
        }
    }
}
