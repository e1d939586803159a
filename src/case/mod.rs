//! Recursive key-case conversion between the caller's camelCase payload
//! convention and the API's snake_case wire format.
//!
//! The conversion is structure-preserving and total: only object keys
//! change, values and array contents never do, and any value that is not
//! an object or array passes through untouched.

mod convert;
mod transform;

pub use convert::{camel_case_key, snake_case_key};
pub use transform::rewrite_keys;

use serde_json::Value;

/// Deep-convert every object key in `value` to camelCase.
pub fn to_camel_case(value: Value) -> Value {
    rewrite_keys(value, &camel_case_key)
}

/// Deep-convert every object key in `value` to snake_case.
pub fn to_snake_case(value: Value) -> Value {
    rewrite_keys(value, &snake_case_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_data() -> Value {
        json!({
            "first_name": "Thor",
            "last_name": "Son of Odin",
            "address": {
                "home_planet": "Asgard"
            },
            "friends": [
                {
                    "first_name": "Tony",
                    "address": {
                        "home_planet": "Earth"
                    }
                }
            ]
        })
    }

    #[test]
    fn test_to_camel_case_nested_structure() {
        let expected = json!({
            "firstName": "Thor",
            "lastName": "Son of Odin",
            "address": {
                "homePlanet": "Asgard"
            },
            "friends": [
                {
                    "firstName": "Tony",
                    "address": {
                        "homePlanet": "Earth"
                    }
                }
            ]
        });

        assert_eq!(to_camel_case(test_data()), expected);
    }

    #[test]
    fn test_round_trip_restores_snake_case() {
        assert_eq!(to_snake_case(to_camel_case(test_data())), test_data());
    }

    #[test]
    fn test_snake_case_input_is_fixed_point() {
        assert_eq!(to_snake_case(test_data()), test_data());
    }

    #[test]
    fn test_lowercase_keys_are_fixed_points_both_ways() {
        let input = json!({"name": "standup", "privacy": "private"});
        assert_eq!(to_camel_case(input.clone()), input);
        assert_eq!(to_snake_case(input.clone()), input);
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(to_camel_case(json!(42)), json!(42));
        assert_eq!(to_snake_case(json!("x")), json!("x"));
        assert_eq!(to_camel_case(json!(null)), json!(null));
        assert_eq!(to_snake_case(json!([1, 2, 3])), json!([1, 2, 3]));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_camel_case(json!({})), json!({}));
        assert_eq!(to_snake_case(json!([])), json!([]));
    }

    #[test]
    fn test_null_values_are_not_treated_as_objects() {
        let input = json!({"room_config": null});
        assert_eq!(to_camel_case(input), json!({"roomConfig": null}));
    }
}
