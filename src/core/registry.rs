//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ inventory::submit! → ServiceRegistration / RepositoryRegistration 수집
//!
//! 2. 런타임 초기화 (main)
//!    ├─ ServiceLocator::set(database) → 인프라 컴포넌트 등록
//!    └─ ServiceLocator::initialize_all() → 리포지토리, 서비스 순서로 초기화
//!
//! 3. 사용
//!    └─ UserService::instance() → 캐시된 싱글톤 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all().await?;
//!
//! let user_service = UserService::instance()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::errors::AppError;

/// 등록된 컴포넌트의 초기화 작업
pub type InitFuture = BoxFuture<'static, Result<(), AppError>>;

/// 서비스 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub init: fn() -> InitFuture,
}

/// 리포지토리 등록 정보
///
/// 리포지토리 초기화는 컬렉션 인덱스 준비까지 포함합니다.
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub collection: &'static str,
    pub init: fn() -> InitFuture,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 타입별 인스턴스 보관소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입이 있으면 교체합니다.
    pub fn set<T: Send + Sync + 'static>(instance: Arc<T>) {
        log::info!("📦 Registering: {}", short_type_name::<T>());

        LOCATOR.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    pub fn try_get<T: Send + Sync + 'static>() -> Option<Arc<T>> {
        LOCATOR.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스 조회
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않음
    pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, AppError> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "등록되지 않은 컴포넌트입니다: {} (ServiceLocator::set 필요)",
                short_type_name::<T>()
            ))
        })
    }

    /// 등록된 모든 리포지토리와 서비스를 초기화합니다.
    ///
    /// 리포지토리를 먼저 초기화하며, 하나라도 실패하면 즉시 중단합니다.
    pub async fn initialize_all() -> Result<(), AppError> {
        log::info!("🔄 서비스 레지스트리 초기화");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration> {
            log::info!("  ├─ {} ({})", registration.name, registration.collection);
            (registration.init)().await?;
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration> {
            log::info!("  ├─ {}", registration.name);
            (registration.init)().await?;
            service_count += 1;
        }

        log::info!("  └─ 리포지토리 {}개, 서비스 {}개 준비 완료", repo_count, service_count);
        Ok(())
    }
}

/// `crate::db::Database` -> `Database`
fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
