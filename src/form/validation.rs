use once_cell::sync::Lazy;
use regex::Regex;

// Browsers count U+FEFF as whitespace; Unicode's White_Space does not.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("valid email regex")
});

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 3 characters long";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

/// Validity of one field's current value plus the message to show when invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    pub is_valid: bool,
    pub message: Option<&'static str>,
}

impl FieldVerdict {
    pub fn valid() -> Self {
        Self { is_valid: true, message: None }
    }

    pub fn invalid(message: &'static str) -> Self {
        Self { is_valid: false, message: Some(message) }
    }
}

fn min_chars(value: &str, min: usize, message: &'static str) -> FieldVerdict {
    if value.chars().count() < min {
        FieldVerdict::invalid(message)
    } else {
        FieldVerdict::valid()
    }
}

/// Checks `raw_value` against the rule registered for `field_name`.
/// Fields without a rule are always valid.
pub fn validate(field_name: &str, raw_value: &str) -> FieldVerdict {
    let value = raw_value.trim_matches(is_blank);
    match field_name {
        "name" => min_chars(value, 2, NAME_TOO_SHORT),
        "email" => {
            if EMAIL_RE.is_match(value) {
                FieldVerdict::valid()
            } else {
                FieldVerdict::invalid(EMAIL_INVALID)
            }
        }
        "subject" => min_chars(value, 3, SUBJECT_TOO_SHORT),
        "message" => min_chars(value, 10, MESSAGE_TOO_SHORT),
        _ => FieldVerdict::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_rules_flip_exactly_at_the_limit() {
        let cases = [
            ("name", 2, NAME_TOO_SHORT),
            ("subject", 3, SUBJECT_TOO_SHORT),
            ("message", 10, MESSAGE_TOO_SHORT),
        ];
        for (field, limit, message) in cases {
            let short = "a".repeat(limit - 1);
            let exact = "a".repeat(limit);
            assert_eq!(validate(field, &short), FieldVerdict::invalid(message), "{}", field);
            assert_eq!(validate(field, &exact), FieldVerdict::valid(), "{}", field);
        }
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        assert!(!validate("name", "  a  ").is_valid);
        assert!(validate("name", "  ab ").is_valid);
        assert!(!validate("message", "   \n\t   ").is_valid);
    }

    #[test]
    fn email_pattern() {
        assert!(validate("email", "a@b.com").is_valid);
        assert!(validate("email", " someone@mail.example.org ").is_valid);
        assert_eq!(validate("email", "a@b"), FieldVerdict::invalid(EMAIL_INVALID));
        assert!(!validate("email", "a b@c.com").is_valid);
        assert!(!validate("email", "a@@b.com").is_valid);
        assert!(!validate("email", "").is_valid);
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(!validate("name", "\u{FEFF}a\u{FEFF}").is_valid);
        assert!(validate("name", "\u{FEFF}ab").is_valid);
        assert!(!validate("email", "a\u{FEFF}b@c.com").is_valid);
        assert!(validate("email", "\u{FEFF}a@b.com\u{FEFF}").is_valid);
    }

    #[test]
    fn unknown_fields_are_always_valid() {
        assert_eq!(validate("phone", ""), FieldVerdict::valid());
        assert_eq!(validate("", "x"), FieldVerdict::valid());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate("name", "Åé").is_valid);
        assert!(!validate("name", "Å").is_valid);
    }
}
