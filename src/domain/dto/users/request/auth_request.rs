//! 인증 요청관련 DTO
use crate::utils::string_utils::trim_string;

/// 이메일/비밀번호 로그인 요청
///
/// 형식 검증은 하지 않습니다. 알 수 없는 이메일은 조회 단계에서 `NotFound`,
/// 틀린(빈) 비밀번호는 해시 비교 단계에서 `InvalidCredentials` 가 됩니다.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// 가입 시와 같은 규칙으로 이메일을 정규화합니다.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: trim_string(email).to_lowercase(),
            password: password.to_string(),
        }
    }
}
