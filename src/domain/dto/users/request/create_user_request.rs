//! 사용자 생성 요청 DTO
//!
//! `createUser` / `addUser` 뮤테이션 인자를 묶어 검증합니다.
use validator::{Validate, ValidationError};
use crate::utils::string_utils::trim_string;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (1-50자, 공백 불가)
    #[validate(length(min = 1, max = 50, message = "사용자명은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl CreateUserRequest {
    /// 앞뒤 공백을 제거하고 이메일을 소문자로 정규화한 요청을 만듭니다.
    /// 비밀번호는 입력 그대로 둡니다.
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: trim_string(username),
            email: trim_string(email).to_lowercase(),
            password: password.to_string(),
        }
    }
}

/// 사용자명에 공백 문자가 섞이지 않았는지 검증
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명에는 공백을 사용할 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_input() {
        let request = CreateUserRequest::new("  alice ", " A@X.com ", " secret1 ");

        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, " secret1 ");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let request = CreateUserRequest::new("alice", "not-an-email", "secret1");

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(CreateUserRequest::new("", "a@x.com", "secret1").validate().is_err());
        assert!(CreateUserRequest::new("alice", "a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_rejects_whitespace_in_username() {
        let request = CreateUserRequest::new("al ice", "a@x.com", "secret1");

        assert!(request.validate().is_err());
    }
}
