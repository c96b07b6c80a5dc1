use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use prodsim_core::{Error, ErrorKind, Product, ProductFilter};
use prodsim_storage::EngineManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Deserialize)]
struct ListProductsQuery {
    q: Option<String>,
    category: Option<String>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct SimilarQuery {
    top_n: Option<usize>,
}

#[derive(Deserialize)]
struct SubmatrixRequest {
    indices: Vec<usize>,
}

#[derive(Serialize)]
struct ProductEntry<'a> {
    index: usize,
    #[serde(flatten)]
    product: &'a Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_percent: Option<u32>,
}

impl<'a> ProductEntry<'a> {
    fn new(index: usize, product: &'a Product) -> Self {
        Self {
            index,
            product,
            discount_percent: product.discount_percent(),
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(manager: Arc<EngineManager>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(manager.clone()))
                .configure(Self::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table, shared by the server and tests
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/stats", web::get().to(stats))
            .route("/categories", web::get().to(list_categories))
            .route("/products", web::get().to(list_products))
            .route("/products/{index}", web::get().to(get_product))
            .route("/products/{index}/similar", web::get().to(get_similar))
            .route("/similarity/matrix", web::post().to(similarity_matrix))
            .route("/similarity/{i}/{j}", web::get().to(similarity))
            .route("/reload", web::post().to(reload));
    }
}

fn error_response(err: Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err.kind() {
        ErrorKind::Lookup => HttpResponse::NotFound().json(body),
        ErrorKind::Configuration => {
            warn!("Engine unavailable: {}", err);
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

macro_rules! engine_or_respond {
    ($manager:expr) => {
        match $manager.engine() {
            Ok(engine) => engine,
            Err(e) => return Ok(error_response(e)),
        }
    };
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "title": "prodsim",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn stats(manager: web::Data<Arc<EngineManager>>) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    let stats = engine.catalog().stats();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "products": stats.products,
        "categories": stats.categories,
        "brands": stats.brands,
        "vocabulary_size": engine.vocabulary_size(),
    })))
}

async fn list_categories(manager: web::Data<Arc<EngineManager>>) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    Ok(HttpResponse::Ok().json(engine.catalog().categories()))
}

async fn list_products(
    manager: web::Data<Arc<EngineManager>>,
    query: web::Query<ListProductsQuery>,
) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    let catalog = engine.catalog();
    let filter = ProductFilter::query(query.q.as_deref(), query.category.as_deref());
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let hits = catalog.search(&filter);
    let entries: Vec<ProductEntry> = hits
        .iter()
        .take(limit)
        .filter_map(|&idx| catalog.get(idx).ok().map(|p| ProductEntry::new(idx, p)))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "total": hits.len(),
        "products": entries,
    })))
}

async fn get_product(
    manager: web::Data<Arc<EngineManager>>,
    path: web::Path<usize>,
) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    let index = path.into_inner();
    match engine.catalog().get(index) {
        Ok(product) => Ok(HttpResponse::Ok().json(ProductEntry::new(index, product))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_similar(
    manager: web::Data<Arc<EngineManager>>,
    path: web::Path<usize>,
    query: web::Query<SimilarQuery>,
) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    let top_n = query.top_n.unwrap_or(engine.config().default_top_n);
    match engine.get_similar(path.into_inner(), top_n) {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn similarity(
    manager: web::Data<Arc<EngineManager>>,
    path: web::Path<(usize, usize)>,
) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    let (i, j) = path.into_inner();
    match engine.similarity(i, j) {
        Ok(score) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "i": i,
            "j": j,
            "score": score,
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn similarity_matrix(
    manager: web::Data<Arc<EngineManager>>,
    req: web::Json<SubmatrixRequest>,
) -> ActixResult<HttpResponse> {
    let engine = engine_or_respond!(manager);
    match engine.similarity_submatrix(&req.indices) {
        Ok(matrix) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "indices": req.indices,
            "matrix": matrix,
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn reload(manager: web::Data<Arc<EngineManager>>) -> ActixResult<HttpResponse> {
    match manager.reload() {
        Ok(engine) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true,
            "products": engine.len(),
        }))),
        Err(e) => Ok(error_response(e)),
    }
}
