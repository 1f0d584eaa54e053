use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::dto::advocates::AdvocatesQuery;
use crate::repository::StorageBackend;
use crate::repository::advocate::DieselAdvocateRepository;
use crate::repository::memory::StaticAdvocateRepository;
use crate::services::advocates as advocates_service;

#[derive(Deserialize)]
struct AdvocatesQueryParams {
    q: Option<String>,
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

impl From<AdvocatesQueryParams> for AdvocatesQuery {
    fn from(params: AdvocatesQueryParams) -> Self {
        Self {
            search: params.q,
            page: params.page,
            page_size: params.page_size,
        }
    }
}

#[get("/advocates")]
pub async fn list_advocates(
    params: web::Query<AdvocatesQueryParams>,
    backend: web::Data<StorageBackend>,
) -> impl Responder {
    let query: AdvocatesQuery = params.into_inner().into();

    let result = match backend.get_ref() {
        StorageBackend::Persistent(pool) => {
            advocates_service::list_advocates(&DieselAdvocateRepository::new(pool), query)
        }
        StorageBackend::Static(advocates) => {
            advocates_service::list_advocates(&StaticAdvocateRepository::new(advocates), query)
        }
    };

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/seed")]
pub async fn seed_advocates(backend: web::Data<StorageBackend>) -> impl Responder {
    match backend.get_ref() {
        StorageBackend::Persistent(pool) => {
            match advocates_service::seed_advocates(&DieselAdvocateRepository::new(pool)) {
                Ok(inserted) => HttpResponse::Ok().json(json!({ "inserted": inserted })),
                Err(e) => {
                    error!("Failed to seed advocates: {e}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        StorageBackend::Static(_) => HttpResponse::Ok()
            .body("DATABASE_URL is not set - skipping seed (not needed for the static directory)."),
    }
}
