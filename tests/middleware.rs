use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use event_console::middleware::{LOGIN_PATH, RedirectUnauthorized};

#[actix_web::test]
async fn redirects_unauthorized_to_login() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::get().uri("/events").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), LOGIN_PATH);
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn other_errors_are_left_alone() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::BadGateway().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(resp.headers().get(header::LOCATION).is_none());
}
