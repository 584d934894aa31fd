/// 인증 미들웨어의 동작 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// 토큰이 없거나 유효하지 않으면 익명으로 진행 (인증 강제는 리졸버가 담당)
    #[default]
    Optional,
    /// 토큰이 없으면 익명으로 진행하지만, 제시된 토큰이 유효하지 않으면 401로 거부
    Strict,
}
