use corner_store_api::dto::{CashierDto, OrderDto, OrderProductDto};
use corner_store_api::error::ApiError;
use corner_store_api::models::{Cashier, Category, Order, OrderProduct, Product};
use corner_store_api::schema::{cashiers, categories, order_products, products};
use diesel::prelude::*;
use std::collections::HashMap;

/// Which way an order is being viewed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CashierView {
    /// Order endpoints embed the cashier (without its own orders).
    Embedded,
    /// The order is already nested inside its cashier.
    Omitted,
}

/// Fills in line items, products, categories and (optionally) cashiers for
/// `orders`, keeping their order. Three queries regardless of how many
/// orders are passed.
pub fn load_order_details(
    conn: &mut PgConnection,
    orders: Vec<Order>,
    view: CashierView,
) -> Result<Vec<OrderDto>, ApiError> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let lines = OrderProduct::belonging_to(&orders)
        .inner_join(products::table.inner_join(categories::table))
        .select((
            OrderProduct::as_select(),
            Product::as_select(),
            Category::as_select(),
        ))
        .order(order_products::id.asc())
        .load::<(OrderProduct, Product, Category)>(conn)?;

    let mut lines_by_order: HashMap<i32, Vec<OrderProductDto>> = HashMap::new();
    for line in lines {
        lines_by_order
            .entry(line.0.order_id)
            .or_default()
            .push(OrderProductDto::from(line));
    }

    let cashiers_by_id: HashMap<i32, Cashier> = match view {
        CashierView::Embedded => {
            let cashier_ids: Vec<i32> = orders.iter().map(|order| order.cashier_id).collect();
            cashiers::table
                .filter(cashiers::id.eq_any(cashier_ids))
                .select(Cashier::as_select())
                .load::<Cashier>(conn)?
                .into_iter()
                .map(|cashier| (cashier.id, cashier))
                .collect()
        }
        CashierView::Omitted => HashMap::new(),
    };

    let details = orders
        .into_iter()
        .map(|order| {
            let cashier = cashiers_by_id
                .get(&order.cashier_id)
                .cloned()
                .map(CashierDto::from);
            let lines = lines_by_order.remove(&order.id).unwrap_or_default();
            OrderDto::new(order, cashier, lines)
        })
        .collect();
    Ok(details)
}
