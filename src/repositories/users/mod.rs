//! 사용자 데이터 액세스 계층
//!
//! - [`user_store::UserStore`] - 서비스 계층이 사용하는 저장소 추상화
//! - [`user_repo::UserRepository`] - MongoDB 구현
//! - `memory_repo::MemoryUserRepository` - 테스트용 메모리 구현

pub mod user_store;
pub mod user_repo;
#[cfg(test)]
pub mod memory_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
