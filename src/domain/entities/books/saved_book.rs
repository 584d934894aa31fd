//! 저장된 도서 (사용자 문서에 내장)

use serde::{Deserialize, Serialize};

/// 사용자가 외부 카탈로그에서 골라 저장한 도서
///
/// `book_id` 는 외부 카탈로그(Google Books)의 볼륨 ID입니다.
/// 생성 후에는 변경되지 않으며, 삭제 시 배열에서 통째로 제거됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBook {
    pub book_id: String,
    pub title: String,
    /// 저자 목록 (카탈로그가 준 순서 유지)
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// 표지 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 카탈로그 상세 페이지 링크
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
