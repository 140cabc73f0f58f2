use actix_web::{App, HttpResponse, HttpServer, Responder, middleware::Logger, post, web};
use env_logger::Env;
use std::sync::Arc;
use std::time::Duration;

mod domain;
mod ports;
mod adapters;
mod service;
mod config;

use crate::adapters::http_adapter::ReqwestFetchAdapter;
use crate::config::Config;
use crate::domain::{CheckRequest, CheckResponse};
use crate::service::UrlCheckerService;

type ConcreteService = UrlCheckerService<ReqwestFetchAdapter>;

#[post("/check_urls")]
async fn check_urls(body: web::Bytes, svc: web::Data<Arc<ConcreteService>>) -> impl Responder {
    // Decode by hand so a bad body yields the service's own error shape.
    let request: CheckRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::InternalServerError().json(CheckResponse::error(e.to_string()))
        }
    };

    let url_codes = svc.check(request.urls).await;
    HttpResponse::Ok().json(CheckResponse::codes(url_codes))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let listen_port = config.listen_port;

    let fetcher = ReqwestFetchAdapter {
        timeout: Duration::from_secs(config.timeout_sec),
    };
    let service = UrlCheckerService::new(fetcher, config);
    let service_data: web::Data<Arc<ConcreteService>> = web::Data::new(Arc::new(service));

    log::info!("Listen on :{}", listen_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service_data.clone())
            .service(check_urls)
    })
    .bind(("0.0.0.0", listen_port))?
    .shutdown_timeout(10)
    .run()
    .await
}
