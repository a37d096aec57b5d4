//! Argument parsing for the prefix form of `pickup`.
//!
//! Accepted shape: `<distance_km> <order_value> [--reusable|-r] <restaurant name...>`.
//! The reusable flag may appear anywhere after the two numbers. Range checks
//! (positive, finite) are left to the progression engine so both command forms
//! report the same validation errors.

use crate::database::models::PickupEvent;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickupArgsError {
    #[error("missing distance in km")]
    MissingDistance,
    #[error("`{0}` is not a distance in km")]
    BadDistance(String),
    #[error("missing order value")]
    MissingOrderValue,
    #[error("`{0}` is not an order value")]
    BadOrderValue(String),
    #[error("missing restaurant name")]
    MissingRestaurant,
}

pub const USAGE: &str = "pickup <distance_km> <order_value> [--reusable] <restaurant>";

fn is_reusable_flag(token: &str) -> bool {
    matches!(token, "--reusable" | "-r" | "reusable")
}

/// Parses a number that may carry thousands separators (`15,000`).
fn parse_amount(token: &str) -> Option<f64> {
    token.replace(',', "").parse::<f64>().ok()
}

pub fn parse_pickup_args(args: &[&str]) -> Result<PickupEvent, PickupArgsError> {
    let mut iter = args.iter().copied();

    let distance_raw = iter.next().ok_or(PickupArgsError::MissingDistance)?;
    let distance_km = distance_raw
        .trim_end_matches("km")
        .parse::<f64>()
        .map_err(|_| PickupArgsError::BadDistance(distance_raw.to_string()))?;

    let order_raw = iter.next().ok_or(PickupArgsError::MissingOrderValue)?;
    let order_value =
        parse_amount(order_raw).ok_or_else(|| PickupArgsError::BadOrderValue(order_raw.to_string()))?;

    let mut used_reusable_container = false;
    let mut name_parts = Vec::new();
    for token in iter {
        if is_reusable_flag(token) {
            used_reusable_container = true;
        } else {
            name_parts.push(token);
        }
    }
    if name_parts.is_empty() {
        return Err(PickupArgsError::MissingRestaurant);
    }

    Ok(PickupEvent {
        restaurant_name: name_parts.join(" "),
        distance_km,
        order_value,
        used_reusable_container,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_form() {
        let event = parse_pickup_args(&["1.2", "15,000", "--reusable", "Mega", "Coffee"]).unwrap();
        assert_eq!(event.restaurant_name, "Mega Coffee");
        assert_eq!(event.distance_km, 1.2);
        assert_eq!(event.order_value, 15000.0);
        assert!(event.used_reusable_container);
    }

    #[test]
    fn flag_is_optional_and_position_free() {
        let event = parse_pickup_args(&["2km", "9000", "Bonjuk", "-r"]).unwrap();
        assert_eq!(event.distance_km, 2.0);
        assert_eq!(event.restaurant_name, "Bonjuk");
        assert!(event.used_reusable_container);

        let event = parse_pickup_args(&["2", "9000", "Bonjuk"]).unwrap();
        assert!(!event.used_reusable_container);
    }

    #[test]
    fn reports_the_first_missing_piece() {
        assert_eq!(parse_pickup_args(&[]), Err(PickupArgsError::MissingDistance));
        assert_eq!(parse_pickup_args(&["1"]), Err(PickupArgsError::MissingOrderValue));
        assert_eq!(
            parse_pickup_args(&["1", "100", "-r"]),
            Err(PickupArgsError::MissingRestaurant)
        );
        assert_eq!(
            parse_pickup_args(&["far", "100", "x"]),
            Err(PickupArgsError::BadDistance("far".into()))
        );
    }

    #[test]
    fn negative_values_parse_and_are_left_to_validation() {
        let event = parse_pickup_args(&["-1", "0", "Shop"]).unwrap();
        assert_eq!(event.distance_km, -1.0);
        assert_eq!(event.order_value, 0.0);
    }
}
