use crate::controllers::functions::{load_order_details, CashierView};
use crate::insertables::NewCashier;
use actix_web::{get, http::header, post, web, HttpResponse};
use corner_store_api::db::DbPool;
use corner_store_api::dto::CashierDto;
use corner_store_api::error::ApiError;
use corner_store_api::models::{Cashier, Order};
use corner_store_api::schema::{cashiers, orders};
use diesel::prelude::*;

pub fn get_cashier_by_id(conn: &mut PgConnection, cashier_id: i32) -> Result<CashierDto, ApiError> {
    let cashier = cashiers::table
        .find(cashier_id)
        .select(Cashier::as_select())
        .first::<Cashier>(conn)?;
    let cashier_orders = Order::belonging_to(&cashier)
        .select(Order::as_select())
        .order(orders::id.asc())
        .load::<Order>(conn)?;
    let orders = load_order_details(conn, cashier_orders, CashierView::Omitted)?;
    Ok(CashierDto::with_orders(cashier, orders))
}

pub fn insert_new_cashier(conn: &mut PgConnection, new_cashier: &NewCashier) -> Result<Cashier, ApiError> {
    let cashier = diesel::insert_into(cashiers::table)
        .values(new_cashier)
        .returning(Cashier::as_returning())
        .get_result::<Cashier>(conn)?;
    tracing::info!(cashier_id = cashier.id, "cashier created");
    Ok(cashier)
}

#[get("/api/cashiers/{cashier_id}")]
pub async fn get_cashier(
    pool: web::Data<DbPool>,
    cashier_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let cashier = web::block(move || {
        let mut conn = pool.get()?;
        get_cashier_by_id(&mut conn, *cashier_id)
    })
    .await??;
    Ok(HttpResponse::Ok().json(cashier))
}

#[post("/api/cashiers")]
pub async fn create_cashier(
    pool: web::Data<DbPool>,
    form: web::Json<NewCashier>,
) -> Result<HttpResponse, ApiError> {
    let cashier = web::block(move || {
        let mut conn = pool.get()?;
        insert_new_cashier(&mut conn, &form)
    })
    .await??;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/cashiers/{}", cashier.id)))
        .json(CashierDto::with_orders(cashier, Vec::new())))
}
