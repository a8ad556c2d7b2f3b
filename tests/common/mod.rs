//! Recording stand-in for the remote event service.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

use event_console::api::http::HttpApi;

/// Every request line the fake service saw, in arrival order.
#[derive(Default)]
pub struct Recorded(Mutex<Vec<String>>);

impl Recorded {
    fn push(&self, req: &HttpRequest) {
        let line = match req.query_string() {
            "" => format!("{} {}", req.method(), req.path()),
            query => format!("{} {}?{}", req.method(), req.path(), query),
        };
        self.0.lock().unwrap().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub struct FakeService {
    pub addr: SocketAddr,
    pub recorded: web::Data<Recorded>,
}

impl FakeService {
    pub fn api(&self) -> HttpApi {
        HttpApi::new(&format!("http://{}/", self.addr)).unwrap()
    }
}

async fn list_events(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    recorded.push(&req);
    HttpResponse::Ok().json(json!([
        { "id": "e1", "name": "RustConf", "status": "live" },
        { "id": 2, "name": "Meetup", "maxAttendees": "40" }
    ]))
}

async fn get_event(path: web::Path<String>) -> HttpResponse {
    match path.as_str() {
        "missing" => HttpResponse::NotFound().finish(),
        "empty" => HttpResponse::Ok().finish(),
        id => HttpResponse::Ok().json(json!({ "id": id, "name": "RustConf" })),
    }
}

async fn list_speakers(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    recorded.push(&req);
    HttpResponse::Ok().json(json!({
        "speakers": [{ "id": "s1", "name": "Ferris" }],
        "total_pages": 3
    }))
}

/// Rejects any speaker whose payload mentions "Broken".
async fn create_speaker(
    req: HttpRequest,
    body: web::Bytes,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    recorded.push(&req);
    if body.windows(6).any(|window| window == b"Broken") {
        return HttpResponse::InternalServerError().body("speaker rejected");
    }
    HttpResponse::Created().finish()
}

async fn list_sponsors(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    recorded.push(&req);
    HttpResponse::Ok().json(json!([]))
}

async fn failing_agenda() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

async fn record(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    recorded.push(&req);
    HttpResponse::Ok().finish()
}

pub async fn start_server() -> FakeService {
    let recorded = web::Data::new(Recorded::default());
    let data = recorded.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/events", web::get().to(list_events))
            .route("/events", web::post().to(record))
            .route("/events/{id}", web::get().to(get_event))
            .route("/speakers", web::get().to(list_speakers))
            .route("/speakers", web::post().to(create_speaker))
            .route("/speakers/{id}", web::put().to(record))
            .route("/sponsors", web::get().to(list_sponsors))
            .route("/sponsors/{id}", web::delete().to(record))
            .route("/attendees/{id}", web::delete().to(record))
            .route("/agendaItems", web::get().to(failing_agenda))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    FakeService { addr, recorded }
}
