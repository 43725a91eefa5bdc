use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::search::SearchQueryParams;
use crate::routes::error_response;
use crate::services::search as search_service;
use crate::upstream::SearchUpstream;

#[get("/search")]
/// Proxy a repository search to the upstream and return one result page.
pub async fn api_search(
    pairs: web::Query<Vec<(String, String)>>,
    upstream: web::Data<dyn SearchUpstream>,
) -> impl Responder {
    let params = SearchQueryParams::from_pairs(pairs.into_inner());
    match search_service::search_repositories(upstream.get_ref(), params).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
