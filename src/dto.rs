//! Response shapes. Each one is built from rows that were already loaded and
//! never points back at its parent, so serializing a cashier or an order can
//! not loop.

use crate::models::{line_total, Cashier, Category, Order, OrderProduct, Product};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            id: category.id,
            category_name: category.category_name,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub brand: String,
    pub category_id: i32,
    pub category: CategoryDto,
}

impl From<(Product, Category)> for ProductDto {
    fn from((product, category): (Product, Category)) -> Self {
        ProductDto {
            id: product.id,
            product_name: product.product_name,
            price: product.price,
            brand: product.brand,
            category_id: product.category_id,
            category: category.into(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductDto {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product: ProductDto,
}

impl From<(OrderProduct, Product, Category)> for OrderProductDto {
    fn from((line, product, category): (OrderProduct, Product, Category)) -> Self {
        OrderProductDto {
            id: line.id,
            order_id: line.order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            product: (product, category).into(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub cashier_id: i32,
    /// Present on order endpoints, absent when the order is nested in its cashier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashier: Option<CashierDto>,
    pub paid_on_date: Option<NaiveDateTime>,
    pub order_products: Vec<OrderProductDto>,
    pub total: Decimal,
}

impl OrderDto {
    pub fn new(
        order: Order,
        cashier: Option<CashierDto>,
        order_products: Vec<OrderProductDto>,
    ) -> Self {
        let total = order_total(&order_products);
        OrderDto {
            id: order.id,
            cashier_id: order.cashier_id,
            cashier,
            paid_on_date: order.paid_on_date,
            order_products,
            total,
        }
    }
}

/// Sum of `quantity * price` over the line items; zero when there are none.
pub fn order_total(order_products: &[OrderProductDto]) -> Decimal {
    order_products
        .iter()
        .map(|line| line_total(line.quantity, line.product.price))
        .sum()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashierDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Present on cashier endpoints, absent when the cashier is nested in an order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<OrderDto>>,
}

impl CashierDto {
    /// Cashier with its orders, as returned by the cashier endpoints.
    pub fn with_orders(cashier: Cashier, orders: Vec<OrderDto>) -> Self {
        let mut dto = CashierDto::from(cashier);
        dto.orders = Some(orders);
        dto
    }
}

impl From<Cashier> for CashierDto {
    fn from(cashier: Cashier) -> Self {
        CashierDto {
            full_name: cashier.full_name(),
            id: cashier.id,
            first_name: cashier.first_name,
            last_name: cashier.last_name,
            orders: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;
    use serde_json::json;
    use std::str::FromStr;

    fn seeded_order(seed: &SeedData, order_id: i32) -> OrderDto {
        let order = seed.orders.iter().find(|o| o.id == order_id).unwrap().clone();
        let lines = seed
            .order_products
            .iter()
            .filter(|line| line.order_id == order_id)
            .map(|line| {
                let product = seed
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .unwrap()
                    .clone();
                let category = seed
                    .categories
                    .iter()
                    .find(|c| c.id == product.category_id)
                    .unwrap()
                    .clone();
                OrderProductDto::from((line.clone(), product, category))
            })
            .collect();
        OrderDto::new(order, None, lines)
    }

    #[test]
    fn seeded_order_two_totals_46_85() {
        let seed = SeedData::load().unwrap();
        let order = seeded_order(&seed, 2);
        assert_eq!(order.order_products.len(), 4);
        assert_eq!(order.total, Decimal::from_str("46.85").unwrap());
    }

    #[test]
    fn order_without_line_items_totals_zero() {
        let order = Order {
            id: 9,
            cashier_id: 1,
            paid_on_date: None,
        };
        let dto = OrderDto::new(order, None, Vec::new());
        assert_eq!(dto.total, Decimal::ZERO);
    }

    #[test]
    fn nested_cashier_omits_orders() {
        let seed = SeedData::load().unwrap();
        let cashier = seed.cashiers.iter().find(|c| c.id == 1).unwrap().clone();
        let mut order = seeded_order(&seed, 2);
        order.cashier = Some(cashier.into());

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value["cashier"],
            json!({
                "id": 1,
                "firstName": "Will",
                "lastName": "Johnson",
                "fullName": "Will Johnson"
            })
        );
        assert_eq!(value["paidOnDate"], json!("2024-01-13T09:00:00"));
        assert_eq!(value["total"], json!(46.85));
    }

    #[test]
    fn cashier_orders_omit_cashier() {
        let seed = SeedData::load().unwrap();
        let cashier = seed.cashiers.iter().find(|c| c.id == 1).unwrap().clone();
        let dto = CashierDto::with_orders(cashier, vec![seeded_order(&seed, 2)]);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["fullName"], json!("Will Johnson"));
        let order = &value["orders"][0];
        assert!(order.get("cashier").is_none());
        assert_eq!(order["cashierId"], json!(1));
        assert_eq!(
            order["orderProducts"][0]["product"]["category"]["categoryName"],
            json!("Snack")
        );
    }
}
