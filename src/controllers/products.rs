use crate::insertables::NewProduct;
use actix_web::{get, http::header, post, put, web, HttpResponse};
use corner_store_api::db::DbPool;
use corner_store_api::dto::ProductDto;
use corner_store_api::error::ApiError;
use corner_store_api::models::{Category, Product};
use corner_store_api::schema::{categories, products};
use diesel::prelude::*;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ProductSearch {
    search: Option<String>,
}

/// `ILIKE` pattern matching `search` anywhere, with wildcards in the search
/// text taken literally.
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub fn get_all_products(
    conn: &mut PgConnection,
    search: Option<&str>,
) -> Result<Vec<ProductDto>, ApiError> {
    let mut query = products::table
        .inner_join(categories::table)
        .select((Product::as_select(), Category::as_select()))
        .order(products::id.asc())
        .into_boxed();

    if let Some(search) = search.filter(|s| !s.is_empty()) {
        let pattern = like_pattern(search);
        query = query.filter(
            products::product_name
                .ilike(pattern.clone())
                .or(categories::category_name.ilike(pattern)),
        );
    }

    let rows = query.load::<(Product, Category)>(conn)?;
    Ok(rows.into_iter().map(ProductDto::from).collect())
}

pub fn insert_new_product(conn: &mut PgConnection, new_product: &NewProduct) -> Result<Product, ApiError> {
    let product = diesel::insert_into(products::table)
        .values(new_product)
        .returning(Product::as_returning())
        .get_result::<Product>(conn)?;
    tracing::info!(product_id = product.id, "product created");
    Ok(product)
}

/// Overwrites the four mutable fields; `NotFound` when no product has `product_id`.
pub fn update_product_by_id(
    conn: &mut PgConnection,
    product_id: i32,
    changes: &NewProduct,
) -> Result<Product, ApiError> {
    let product = diesel::update(products::table.find(product_id))
        .set(changes)
        .returning(Product::as_returning())
        .get_result::<Product>(conn)?;
    tracing::info!(product_id, "product updated");
    Ok(product)
}

#[get("/api/products")]
pub async fn get_products(
    pool: web::Data<DbPool>,
    query: web::Query<ProductSearch>,
) -> Result<HttpResponse, ApiError> {
    let all_products = web::block(move || {
        let mut conn = pool.get()?;
        get_all_products(&mut conn, query.search.as_deref())
    })
    .await??;
    Ok(HttpResponse::Ok().json(all_products))
}

#[post("/api/products")]
pub async fn create_product(
    pool: web::Data<DbPool>,
    form: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let product = web::block(move || {
        let mut conn = pool.get()?;
        insert_new_product(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/products/{}", product.id)))
        .json(product))
}

#[put("/api/products/{product_id}")]
pub async fn update_product(
    pool: web::Data<DbPool>,
    product_id: web::Path<i32>,
    form: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let product = web::block(move || {
        let mut conn = pool.get()?;
        update_product_by_id(&mut conn, *product_id, &form)
    })
    .await??;
    Ok(HttpResponse::Ok().json(product))
}
