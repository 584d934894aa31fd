//! 도서 검색 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 GraphQL API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use book_search_backend::config::{
    AuthConfig, CorsConfig, Environment, RateLimitConfig, ServerConfig,
};
use book_search_backend::core::registry::ServiceLocator;
use book_search_backend::db::Database;
use book_search_backend::errors::AppError;
use book_search_backend::graphql::build_schema;
use book_search_backend::routes::configure_all_routes;
use book_search_backend::services::auth::TokenService;
use book_search_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 도서 검색 백엔드 시작중... (환경: {:?})", Environment::current());

    // 비밀키가 없으면 시작하지 않는다
    let token_service = TokenService::instance().map_err(startup_error)?;

    // 데이터 스토어 초기화
    let database = initialize_database().await?;

    // ServiceLocator에 핵심 컴포넌트 등록
    ServiceLocator::set(database);

    // 모든 서비스 초기화 (인덱스 생성 포함)
    ServiceLocator::initialize_all().await.map_err(startup_error)?;

    let schema = build_schema(UserService::instance().map_err(startup_error)?);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(schema, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    schema: book_search_backend::graphql::BookSearchSchema,
    token_service: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let auth_mode = AuthConfig::auth_mode();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 GraphQL: http://{}/graphql", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("🔐 인증 모드: {:?}", auth_mode);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let schema = web::Data::new(schema);
    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let token_service = token_service.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(schema.clone())
            .configure(move |cfg| configure_all_routes(cfg, token_service, auth_mode))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결을 초기화합니다
async fn initialize_database() -> std::io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    Ok(Arc::new(database))
}

/// 시작 단계 실패를 기록하고 프로세스 종료용 에러로 바꿉니다
fn startup_error(e: AppError) -> std::io::Error {
    error!("서비스 초기화 실패: {}", e);
    std::io::Error::other(e.to_string())
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `CORS_ALLOWED_ORIGINS` (쉼표 구분)
/// * 미설정 시 `http://localhost:3000` 등 로컬 개발 서버
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
