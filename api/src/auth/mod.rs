//! Auth context middleware
//!
//! Injects the acting `User` into request extensions so handlers never
//! construct identity themselves. There is no real auth layer in this
//! scope; the context carries a fixed placeholder user, and swapping in a
//! real one only touches this module.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::domain::entities::{User, UserId};

/// The placeholder identity attached to every request
pub fn placeholder_user() -> User {
    User {
        id: UserId::new("test-user"),
        email: "test@test.com".to_string(),
        password: "fake".to_string(),
    }
}

/// Auth context middleware
///
/// Routes that need an acting user should use this middleware and extract
/// the user with `Extension<User>`.
pub async fn auth_context(mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(placeholder_user());
    next.run(request).await
}
