use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use cors_gate::{Cors, CorsOptions, Origins, RouteMethods, write_headers};

async fn greet() -> &'static str {
    "hello"
}

async fn cors_middleware(State(cors): State<Arc<Cors>>, mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(RouteMethods::from_methods(&[Method::GET, Method::OPTIONS]));

    let headers = match cors.check(&request) {
        Ok(headers) => headers,
        Err(err) => return (err.status_code(), err.to_string()).into_response(),
    };

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };
    write_headers(response.headers_mut(), &headers);
    response
}

#[tokio::main]
async fn main() {
    let cors = Cors::new(CorsOptions {
        origins: Origins::list(["https://*.example.com", "http://localhost:5173"]),
        credentials: true,
        max_age: Some(600),
        ..CorsOptions::default()
    })
    .expect("valid CORS configuration");

    let app = Router::new()
        .route("/greet", get(greet))
        .layer(middleware::from_fn_with_state(Arc::new(cors), cors_middleware));

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum demo running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
