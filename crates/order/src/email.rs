//! Order confirmation and the email sent to the society.

use crate::error::{OrderError, Result};
use crate::pricing::Pricing;
use crate::state::OrderState;
use crate::validation::validate_form_data;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use srb_core::config::ConfigSchema;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: u32,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPricing {
    /// Total including shipping
    pub total: u64,
    pub currency: String,
}

/// A completed, validated order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub customer: Customer,
    pub delivery: Delivery,
    pub items: Vec<OrderItem>,
    pub pricing: OrderPricing,
}

impl OrderConfirmation {
    /// Build the confirmation for a finished order.
    ///
    /// The form must pass validation and the order must have a number. When
    /// the state carries no total it is computed from `pricing`.
    pub fn from_state(state: &OrderState, pricing: &Pricing, product: &str) -> Result<Self> {
        validate_form_data(&state.form_data)?;
        let order_number = state
            .order_number
            .clone()
            .ok_or(OrderError::MissingOrderNumber)?;

        let form = &state.form_data;
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();

        Ok(Self {
            order_number,
            customer: Customer {
                full_name: form.display_name(),
                email: field(&form.email),
                phone: field(&form.phone),
            },
            delivery: Delivery {
                street: field(&form.street),
                postal_code: field(&form.postal_code),
                city: field(&form.city),
                country: field(&form.country),
            },
            items: vec![OrderItem {
                quantity: state.quantity,
                product: product.to_string(),
            }],
            pricing: OrderPricing {
                total: state
                    .total_amount
                    .unwrap_or_else(|| pricing.total(state.quantity)),
                currency: pricing.currency.clone(),
            },
        })
    }

    /// Build the confirmation with the configured pricing and product name.
    pub fn from_config(state: &OrderState, schema: &ConfigSchema) -> Result<Self> {
        Self::from_state(
            state,
            &Pricing::from(&schema.pricing),
            &schema.order.product_name,
        )
    }
}

/// Subject and plain-text body of an order email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEmail {
    pub subject: String,
    pub body: String,
}

/// Compose the order email, dated `date`.
pub fn compose_order_email(order: &OrderConfirmation, date: NaiveDate) -> OrderEmail {
    let customer = &order.customer;
    let delivery = &order.delivery;

    let mut body = String::new();
    let _ = writeln!(body, "Beställning: {}", order.order_number);
    let _ = writeln!(body, "Datum: {}", date.format("%Y-%m-%d"));
    body.push('\n');
    let _ = writeln!(body, "Kund: {}", customer.full_name);
    let _ = writeln!(body, "E-post: {}", customer.email);
    let _ = writeln!(body, "Telefon: {}", customer.phone);
    body.push('\n');
    body.push_str("Adress:\n");
    let _ = writeln!(body, "{}", delivery.street);
    let _ = writeln!(body, "{} {}", delivery.postal_code, delivery.city);
    let _ = writeln!(body, "{}", delivery.country);
    body.push('\n');
    for item in &order.items {
        let _ = writeln!(body, "Beställning: {} x {}", item.quantity, item.product);
    }
    let _ = writeln!(
        body,
        "Totalt: {} {} (inkl frakt)",
        order.pricing.total, order.pricing.currency
    );
    body.push('\n');
    let _ = write!(body, "Swish-betalning genomförd till: {}", customer.phone);

    OrderEmail {
        subject: format!("Beställning {}", order.order_number),
        body,
    }
}

impl OrderEmail {
    /// Compose the email dated today in local time.
    pub fn for_today(order: &OrderConfirmation) -> Self {
        compose_order_email(order, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FormData, FormError};

    fn state() -> OrderState {
        let mut state = OrderState::new();
        state.order_number = Some("SRB-250307-0905-K3Q9ZD-M7XK2P1C".to_string());
        state.set_quantity(2, &Pricing::default());
        state.form_data = FormData {
            first_name: Some("Anna".into()),
            last_name: Some("Andersson".into()),
            email: Some("anna@example.com".into()),
            phone: Some("070-123 45 67".into()),
            street: Some("Storgatan 1".into()),
            postal_code: Some("123 45".into()),
            city: Some("Stockholm".into()),
            country: Some("Sverige".into()),
            full_name: None,
        };
        state
    }

    fn confirmation() -> OrderConfirmation {
        OrderConfirmation::from_state(&state(), &Pricing::default(), "Svenska Reformationsbibeln")
            .unwrap()
    }

    #[test]
    fn test_from_state() {
        let order = confirmation();
        assert_eq!(order.customer.full_name, "Anna Andersson");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.pricing.total, 449);
    }

    #[test]
    fn test_from_state_rejects_invalid_form() {
        let mut state = state();
        state.form_data.email = Some("not-an-email".into());
        assert!(matches!(
            OrderConfirmation::from_state(&state, &Pricing::default(), "Bibel"),
            Err(OrderError::Form(FormError::InvalidEmail))
        ));

        let mut state = self::state();
        state.order_number = None;
        assert!(matches!(
            OrderConfirmation::from_state(&state, &Pricing::default(), "Bibel"),
            Err(OrderError::MissingOrderNumber)
        ));
    }

    #[test]
    fn test_from_config_uses_configured_product() {
        let mut schema = ConfigSchema::default();
        let order = OrderConfirmation::from_config(&state(), &schema).unwrap();
        assert_eq!(order.items[0].product, "Svenska Reformationsbibeln");

        schema.order.product_name = "Nya testamentet".to_string();
        schema.pricing.currency = "SEK".to_string();
        let order = OrderConfirmation::from_config(&state(), &schema).unwrap();
        assert_eq!(order.items[0].product, "Nya testamentet");
        assert_eq!(order.pricing.currency, "SEK");
    }

    #[test]
    fn test_total_computed_when_missing() {
        let mut state = state();
        state.total_amount = None;
        let order = OrderConfirmation::from_state(&state, &Pricing::default(), "Bibel").unwrap();
        assert_eq!(order.pricing.total, 449);
    }

    #[test]
    fn test_email_content() {
        let email = compose_order_email(
            &confirmation(),
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        );
        assert_eq!(email.subject, "Beställning SRB-250307-0905-K3Q9ZD-M7XK2P1C");

        let expected = "\
Beställning: SRB-250307-0905-K3Q9ZD-M7XK2P1C
Datum: 2025-03-07

Kund: Anna Andersson
E-post: anna@example.com
Telefon: 070-123 45 67

Adress:
Storgatan 1
123 45 Stockholm
Sverige

Beställning: 2 x Svenska Reformationsbibeln
Totalt: 449 kr (inkl frakt)

Swish-betalning genomförd till: 070-123 45 67";
        assert_eq!(email.body, expected);
    }

    #[test]
    fn test_for_today_mentions_customer() {
        let email = OrderEmail::for_today(&confirmation());
        assert!(email.body.contains("Anna Andersson"));
        assert!(email.body.contains("anna@example.com"));
        assert!(email.body.contains("449 kr"));
    }
}
