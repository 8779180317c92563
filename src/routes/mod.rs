use axum::routing::{delete, get, post, put};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub(crate) mod items;
pub(crate) mod users;

/// Builds the application router. Paths mirror the legacy API exactly.
pub fn router(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/health", get(health))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/users", get(users::list_users))
        .route("/add_item", post(items::add_item))
        .route("/view_items", get(items::view_items))
        .route("/search_by_id/{id}", get(items::search_by_id))
        .route("/search_by_location/{location_id}", get(items::search_by_location))
        .route("/search_by_name/{item_name}", get(items::search_by_name))
        .route("/update_item/{id}", put(items::update_item))
        .route("/delete_item/{id}", delete(items::delete_item))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    // connect_lazy hands out a pool without touching the network; none of
    // the requests below reach a query.
    fn test_app() -> Router {
        let pool = PgPool::connect_lazy("postgres://postgres@localhost/lostnfound_test")
            .expect("lazy pool");
        router(pool)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let res = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let res = test_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_item_id_is_rejected() {
        let res = test_app()
            .oneshot(
                Request::builder()
                    .uri("/search_by_id/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_rejects_malformed_json() {
        let res = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/register")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let res = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/register")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Ann"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn register_only_accepts_post() {
        let res = test_app()
            .oneshot(Request::builder().uri("/register").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
