//! # 사용자 관리 서비스 구현
//!
//! 리졸버 계층의 비즈니스 로직입니다. GraphQL 리졸버는 인자를 DTO로 묶어
//! 이 서비스에 넘기고, 결과 또는 도메인 에러를 그대로 돌려받습니다.
//!
//! ## 작업 목록
//!
//! | 작업 | 인증 | 실패 |
//! |------|------|------|
//! | `get_current_user` | 필요 | `NotAuthenticated`, `NotFound` |
//! | `get_user_by_id_or_username` | - | `NotFound` |
//! | `create_user` | - | `CreationFailed` |
//! | `login` | - | `NotFound`, `InvalidCredentials` |
//! | `save_book` | 필요 | `NotAuthenticated`, `NotFound` |
//! | `delete_book` | 필요 | `NotAuthenticated`, `NotFound` |
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost로 비밀번호 해시, 평문은 저장/반환하지 않음
//! - **토큰**: 가입과 로그인 성공 시에만 발급

use std::sync::Arc;
use actix_web::web;
use futures_util::future::FutureExt;
use once_cell::sync::OnceCell;
use validator::Validate;
use crate::{
    config::PasswordConfig,
    core::registry::{InitFuture, ServiceRegistration},
    domain::{
        dto::{
            books::BookInput,
            users::{
                request::{CreateUserRequest, LoginRequest},
                response::{AuthPayload, UserResponse},
            },
        },
        entities::{books::saved_book::SavedBook, users::user::User},
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::AppError,
    repositories::users::{UserRepository, UserStore},
    services::auth::TokenService,
    utils::string_utils::{mask_email, validate_required_string},
};

/// 사용자 관리 서비스
///
/// 저장소와 토큰 서비스를 공유 참조로 보관하며, 요청 간 상태는 없습니다.
pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

/// 싱글톤 인스턴스 저장소
static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

impl UserService {
    /// 레지스트리에 등록된 사용자 리포지토리와 토큰 서비스로 구성된 싱글톤
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `Database` 미등록 또는 비밀키 미설정
    pub fn instance() -> Result<Arc<Self>, AppError> {
        USER_SERVICE_INSTANCE
            .get_or_try_init(|| -> Result<Arc<Self>, AppError> {
                let store: Arc<dyn UserStore> = UserRepository::instance()?;
                Ok(Arc::new(Self::new(store, TokenService::instance()?, PasswordConfig::bcrypt_cost())))
            })
            .cloned()
    }

    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self { store, tokens, bcrypt_cost }
    }

    /// 현재 로그인한 사용자 조회 (`me`)
    ///
    /// 토큰이 가리키는 사용자가 그 사이 사라졌다면 `NotFound` 입니다.
    pub async fn get_current_user(
        &self,
        identity: Option<&AuthenticatedUser>,
    ) -> Result<UserResponse, AppError> {
        let identity = identity.ok_or(AppError::NotAuthenticated)?;

        self.store
            .find_by_id(&identity.id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// ID 또는 사용자명으로 사용자 조회 (`getSingleUser`)
    pub async fn get_user_by_id_or_username(
        &self,
        id: Option<&str>,
        username: Option<&str>,
    ) -> Result<UserResponse, AppError> {
        self.store
            .find_by_id_or_username(id, username)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("해당 ID 또는 사용자명의 사용자가 없습니다".to_string()))
    }

    /// 새 사용자 생성 (회원가입)
    ///
    /// ## 처리 단계
    ///
    /// 1. **입력 검증**: 이메일 형식, 비어 있지 않은 사용자명/비밀번호
    /// 2. **비밀번호 해싱**: 환경별 cost의 bcrypt
    /// 3. **저장**: 이메일/사용자명 유니크 제약 확인
    /// 4. **토큰 발급**: 저장된 사용자의 신원 정보로 서명
    ///
    /// 저장소가 쓰기를 거부한 경우(검증 실패, 중복)는 모두 `CreationFailed` 입니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<AuthPayload, AppError> {
        request.validate()
            .map_err(|e| AppError::CreationFailed(e.to_string()))?;

        let CreateUserRequest { username, email, password } = request;
        let cost = self.bcrypt_cost;

        let hash_start = std::time::Instant::now();
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(username, email, password_hash);

        let created_user = self.store.create(user).await.map_err(|e| match e {
            AppError::ConflictError(msg) | AppError::ValidationError(msg) => {
                AppError::CreationFailed(msg)
            }
            other => other,
        })?;

        log::info!("사용자 생성: {} ({})", created_user.username, mask_email(&created_user.email));

        self.issue_token(created_user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 알 수 없는 이메일은 `NotFound`, 비밀번호 불일치는 `InvalidCredentials` 로
    /// 구분해서 돌려줍니다. 빈 비밀번호도 불일치입니다.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthPayload, AppError> {
        let LoginRequest { email, password } = request;

        let user = self.store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("해당 이메일의 사용자가 없습니다".to_string()))?;

        let password_hash = user.password_hash.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("로그인 실패: {}", mask_email(&email));
            return Err(AppError::InvalidCredentials);
        }

        log::info!("로그인 성공: {}", user.username);

        self.issue_token(user)
    }

    /// 도서 저장 (`saveBook`)
    ///
    /// 같은 `bookId` 를 다시 저장하면 변경 없이 현재 사용자를 돌려줍니다.
    pub async fn save_book(
        &self,
        identity: Option<&AuthenticatedUser>,
        book: BookInput,
    ) -> Result<UserResponse, AppError> {
        let identity = identity.ok_or(AppError::NotAuthenticated)?;

        book.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        self.store
            .add_saved_book(&identity.id, SavedBook::from(book))
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 저장한 도서 삭제 (`deleteBook`)
    ///
    /// 저장되어 있지 않은 도서를 삭제해도 성공입니다.
    pub async fn delete_book(
        &self,
        identity: Option<&AuthenticatedUser>,
        book_id: &str,
    ) -> Result<UserResponse, AppError> {
        let identity = identity.ok_or(AppError::NotAuthenticated)?;
        let book_id = validate_required_string(book_id, "bookId")?;

        self.store
            .remove_saved_book(&identity.id, &book_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    fn issue_token(&self, user: User) -> Result<AuthPayload, AppError> {
        let identity = user.identity().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;
        let token = self.tokens.sign(&identity)?;

        Ok(AuthPayload::new(token, user))
    }
}

fn init_user_service() -> InitFuture {
    async { UserService::instance().map(|_| ()) }.boxed()
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        init: init_user_service,
    }
}
