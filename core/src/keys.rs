//! Key-convention translation between Rust snake_case and the remote API's
//! lower-camel-case.
//!
//! Applied to every key on the create path, so caller-supplied keys outside
//! the known field set still reach the wire translated rather than rejected.
//! The two functions are exact inverses over the known field set
//! (`group_name` ↔ `groupName`, `field_type` ↔ `fieldType`, ...).

/// `group_name` → `groupName`. Keys without underscores pass through
/// unchanged.
pub fn snake_to_lower_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `groupName` → `group_name`. Keys without uppercase letters pass through
/// unchanged.
pub fn lower_camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_FIELDS: [(&str, &str); 8] = [
        ("name", "name"),
        ("description", "description"),
        ("group_name", "groupName"),
        ("type", "type"),
        ("field_type", "fieldType"),
        ("form_field", "formField"),
        ("display_order", "displayOrder"),
        ("options", "options"),
    ];

    #[test]
    fn known_fields_translate_both_ways() {
        for (snake, camel) in KNOWN_FIELDS {
            assert_eq!(snake_to_lower_camel(snake), camel);
            assert_eq!(lower_camel_to_snake(camel), snake);
        }
    }

    #[test]
    fn round_trip_is_stable_for_known_fields() {
        for (snake, _) in KNOWN_FIELDS {
            assert_eq!(lower_camel_to_snake(&snake_to_lower_camel(snake)), snake);
        }
    }

    #[test]
    fn unknown_keys_still_translate() {
        assert_eq!(snake_to_lower_camel("external_options"), "externalOptions");
        assert_eq!(snake_to_lower_camel("mutable_has_unique_value"), "mutableHasUniqueValue");
    }

    #[test]
    fn digits_survive_translation() {
        assert_eq!(snake_to_lower_camel("field_2"), "field2");
        assert_eq!(lower_camel_to_snake("field2"), "field2");
    }
}
