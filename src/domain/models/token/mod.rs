//! 토큰 관련 값 객체

pub mod token;

pub use token::TokenClaims;
