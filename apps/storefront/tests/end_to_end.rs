//! Full visitor journeys through the storefront commands.

use metalbase_core::{ContactDetails, Money, Notification, RawLaserParams};
use metalbase_storefront::commands::{cart, catalog, config, laser, order};
use metalbase_storefront::{init_tracing, ConfigState, Session};

fn contact() -> ContactDetails {
    ContactDetails {
        name: "Пётр Петров".to_string(),
        phone: "+7 (900) 000-00-00".to_string(),
        email: "petrov@example.com".to_string(),
        comment: Some("Доставка на объект".to_string()),
    }
}

#[test]
fn order_journey() {
    init_tracing();
    let mut session = Session::new(ConfigState::default());

    cart::add_to_cart(&mut session, 1).unwrap();
    cart::add_to_cart(&mut session, 1).unwrap();
    let res = cart::add_to_cart(&mut session, 3).unwrap();

    let lines: Vec<(u32, i64)> = res
        .cart
        .items
        .iter()
        .map(|i| (i.product.id, i.quantity))
        .collect();
    assert_eq!(lines, vec![(1, 2), (3, 1)]);
    assert_eq!(res.cart.totals.total, Money::from_rubles(55_900));
    assert_eq!(res.cart.totals.total.to_string(), "55\u{a0}900 ₽");

    let res = order::submit_order(&mut session, contact()).unwrap();
    assert_eq!(res.receipt.total, Money::from_rubles(55_900));
    assert_eq!(res.notification, Notification::OrderSubmitted);
    assert!(cart::get_cart(&session).items.is_empty());
}

#[test]
fn browsing_then_ordering_from_a_category() {
    let mut session = Session::default();

    let page = catalog::select_category(&mut session, "Швеллеры".to_string());
    assert_eq!(page.products.len(), 1);

    let channel_id = page.products[0].id;
    cart::add_to_cart(&mut session, channel_id).unwrap();
    let res = cart::update_quantity(&mut session, channel_id, 4);
    assert_eq!(res.totals.total, Money::from_rubles(59_000 * 4));

    // Changing the filter never touches the cart
    catalog::select_category(&mut session, "Все".to_string());
    assert_eq!(cart::get_cart(&session).totals.total_quantity, 4);
}

#[test]
fn laser_journey() {
    let mut session = Session::default();
    assert_eq!(laser::get_laser_quote(&session).price, None);

    let quote = laser::set_laser_params(
        &mut session,
        RawLaserParams {
            material: "stainless".to_string(),
            thickness: 10.0,
            area: 2.0,
            complexity: "complex".to_string(),
        },
    )
    .unwrap();
    assert_eq!(quote.price, Some(Money::from_rubles(2000)));

    let res = laser::submit_laser_request(&session, contact(), None);
    assert_eq!(
        res.notification,
        Notification::LaserRequestSubmitted {
            price: Money::from_rubles(2000)
        }
    );
    assert_eq!(res.notification.title(), "Заявка на лазерную резку отправлена");

    // The cart is untouched by laser requests
    assert!(session.cart.is_empty());
}

#[test]
fn configured_store_formats_prices_with_its_currency() {
    let state = ConfigState::from_json(r#"{ "storeName": "Сталь-Юг", "currencySymbol": "руб." }"#).unwrap();
    let mut session = Session::new(state);

    assert_eq!(config::get_store_config(&session).store_name, "Сталь-Юг");

    let res = cart::add_to_cart(&mut session, 1).unwrap();
    assert_eq!(res.cart.formatted_total, "450 руб.");

    let quote = laser::set_laser_params(
        &mut session,
        RawLaserParams {
            material: "steel".to_string(),
            thickness: 0.0,
            area: 1.0,
            complexity: "simple".to_string(),
        },
    )
    .unwrap();
    assert_eq!(quote.formatted_price.as_deref(), Some("150 руб."));
}
