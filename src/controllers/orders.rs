use crate::controllers::functions::{load_order_details, CashierView};
use crate::insertables::NewOrder;
use actix_web::{delete, get, http::header, post, web, HttpResponse};
use chrono::NaiveDateTime;
use corner_store_api::db::DbPool;
use corner_store_api::dto::OrderDto;
use corner_store_api::error::ApiError;
use corner_store_api::models::Order;
use corner_store_api::schema::{order_products, orders};
use diesel::prelude::*;
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
pub struct OrderFilter {
    #[serde(rename = "orderDate", default, deserialize_with = "empty_as_none")]
    order_date: Option<NaiveDateTime>,
}

/// `?orderDate=` with no value means no filter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<NaiveDateTime>()
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Orders paid exactly at `order_date` when given, every order otherwise.
pub fn get_all_orders(
    conn: &mut PgConnection,
    order_date: Option<NaiveDateTime>,
) -> Result<Vec<OrderDto>, ApiError> {
    let mut query = orders::table
        .select(Order::as_select())
        .order(orders::id.asc())
        .into_boxed();
    if let Some(order_date) = order_date {
        query = query.filter(orders::paid_on_date.eq(order_date));
    }
    let all_orders = query.load::<Order>(conn)?;
    load_order_details(conn, all_orders, CashierView::Embedded)
}

pub fn get_order_by_id(conn: &mut PgConnection, order_id: i32) -> Result<OrderDto, ApiError> {
    let order = orders::table
        .find(order_id)
        .select(Order::as_select())
        .first::<Order>(conn)?;
    load_order_details(conn, vec![order], CashierView::Embedded)?
        .pop()
        .ok_or(ApiError::NotFound)
}

/// Inserts the order and its line items atomically and returns the new
/// order fully loaded.
pub fn insert_new_order(conn: &mut PgConnection, new_order: &NewOrder) -> Result<OrderDto, ApiError> {
    conn.transaction(|conn| {
        let order = diesel::insert_into(orders::table)
            .values(new_order.order_row())
            .returning(Order::as_returning())
            .get_result::<Order>(conn)?;
        diesel::insert_into(order_products::table)
            .values(new_order.line_rows(order.id))
            .execute(conn)?;
        tracing::info!(
            order_id = order.id,
            line_items = new_order.order_products.len(),
            "order created"
        );
        get_order_by_id(conn, order.id)
    })
}

/// Deletes the order (its line items go with it) and returns how it looked
/// just before.
pub fn delete_order_by_id(conn: &mut PgConnection, order_id: i32) -> Result<OrderDto, ApiError> {
    conn.transaction(|conn| {
        let order = get_order_by_id(conn, order_id)?;
        diesel::delete(orders::table.find(order_id)).execute(conn)?;
        tracing::info!(order_id, "order deleted");
        Ok(order)
    })
}

#[get("/api/orders")]
pub async fn get_orders(
    pool: web::Data<DbPool>,
    filter: web::Query<OrderFilter>,
) -> Result<HttpResponse, ApiError> {
    let all_orders = web::block(move || {
        let mut conn = pool.get()?;
        get_all_orders(&mut conn, filter.order_date)
    })
    .await??;
    Ok(HttpResponse::Ok().json(all_orders))
}

#[get("/api/orders/{order_id}")]
pub async fn get_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let order = web::block(move || {
        let mut conn = pool.get()?;
        get_order_by_id(&mut conn, *order_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(order))
}

#[post("/api/orders")]
pub async fn create_order(
    pool: web::Data<DbPool>,
    form: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let order = web::block(move || {
        let mut conn = pool.get()?;
        insert_new_order(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/orders/{}", order.id)))
        .json(order))
}

#[delete("/api/orders/{order_id}")]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let order = web::block(move || {
        let mut conn = pool.get()?;
        delete_order_by_id(&mut conn, *order_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(order))
}
