use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        service::auth::token::TokenService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_driver;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", Duration::hours(1))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn token_for(tokens: &TokenService, user: &entity::user::Model) -> String {
    let role = Role::parse(&user.role).unwrap();
    tokens.issue(user.id, role).unwrap()
}
