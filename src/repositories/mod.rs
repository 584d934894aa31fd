//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 서비스 계층은 구체 타입이 아닌
//! [`UserStore`](users::user_store::UserStore) trait에 의존하므로,
//! 테스트에서는 메모리 구현으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = Arc::new(UserRepository::new(database));
//! user_repo.create_indexes().await?;
//! let user = user_repo.find_by_email("a@x.com").await?;
//! ```

pub mod users;
