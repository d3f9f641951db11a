//! Field validators
//!
//! Pure predicates over raw field values. Each known field kind has exactly
//! one rule; fields with no matching kind have no rule and always pass.

use regex::Regex;
use std::sync::LazyLock;

/// Domains accepted by the email rule, matched verbatim (case-sensitive).
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@(ya\.ru|yandex\.(ru|ua|by|kz|com))$"#,
    )
    .expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+7\(\d{3}\)\d{3}-\d{2}-\d{2}$").expect("phone pattern is valid"));

/// Maximum allowed sum of the digit characters in a phone value.
const PHONE_DIGIT_SUM_LIMIT: u32 = 30;

/// Semantic kind of a validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
}

impl FieldKind {
    /// Look up the validation rule for a field name.
    ///
    /// Fails closed: an unrecognized name means "no rule", not "invalid";
    /// callers must treat such fields as passing.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    /// Apply this kind's rule to a raw value.
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Self::Name => is_valid_name(value),
            Self::Email => is_valid_email(value),
            Self::Phone => is_valid_phone(value),
        }
    }
}

/// A name is valid iff it contains exactly three whitespace-separated words.
fn is_valid_name(value: &str) -> bool {
    value.split_whitespace().count() == 3
}

/// An email is valid iff the local part is well-formed and the domain is one
/// of the fixed allow-list (ya.ru and the yandex national domains).
fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// A phone is valid iff it matches `+7(DDD)DDD-DD-DD` and the sum of all its
/// digit characters does not exceed the limit.
fn is_valid_phone(value: &str) -> bool {
    let digit_sum: u32 = value.chars().filter_map(|c| c.to_digit(10)).sum();
    if digit_sum > PHONE_DIGIT_SUM_LIMIT {
        return false;
    }

    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod kind_lookup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_field_names() {
            assert_eq!(FieldKind::from_field_name("name"), Some(FieldKind::Name));
            assert_eq!(FieldKind::from_field_name("email"), Some(FieldKind::Email));
            assert_eq!(FieldKind::from_field_name("phone"), Some(FieldKind::Phone));
        }

        #[test]
        fn test_unknown_field_name_has_no_rule() {
            assert_eq!(FieldKind::from_field_name("nickname"), None);
            assert_eq!(FieldKind::from_field_name(""), None);
            // Lookup is by exact name, not by prefix or case
            assert_eq!(FieldKind::from_field_name("Email"), None);
        }
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_exactly_three_words_is_valid() {
            assert!(FieldKind::Name.is_valid("John Ronald Tolkien"));
        }

        #[test]
        fn test_extra_whitespace_between_words_is_collapsed() {
            assert!(FieldKind::Name.is_valid("John   Ronald \t Tolkien"));
            assert!(FieldKind::Name.is_valid("  John Ronald Tolkien  "));
        }

        #[test]
        fn test_wrong_word_counts_are_invalid() {
            assert!(!FieldKind::Name.is_valid("John"));
            assert!(!FieldKind::Name.is_valid("John Smith"));
            assert!(!FieldKind::Name.is_valid("John Ronald Reuel Tolkien"));
        }

        #[test]
        fn test_empty_and_blank_are_invalid() {
            assert!(!FieldKind::Name.is_valid(""));
            assert!(!FieldKind::Name.is_valid("   "));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_allowed_domains() {
            for domain in [
                "ya.ru",
                "yandex.ru",
                "yandex.ua",
                "yandex.by",
                "yandex.kz",
                "yandex.com",
            ] {
                let value = format!("user@{domain}");
                assert!(FieldKind::Email.is_valid(&value), "expected {value} to pass");
            }
        }

        #[test]
        fn test_other_domains_are_rejected() {
            assert!(!FieldKind::Email.is_valid("user@gmail.com"));
            assert!(!FieldKind::Email.is_valid("user@yandex.fr"));
            assert!(!FieldKind::Email.is_valid("user@ya.com"));
        }

        #[test]
        fn test_subdomains_of_allowed_domains_are_rejected() {
            assert!(!FieldKind::Email.is_valid("user@mail.ya.ru"));
            assert!(!FieldKind::Email.is_valid("user@sub.yandex.ru"));
        }

        #[test]
        fn test_dotted_local_part() {
            assert!(FieldKind::Email.is_valid("first.last@yandex.ru"));
            // A trailing dot leaves an empty atom
            assert!(!FieldKind::Email.is_valid("first.@yandex.ru"));
        }

        #[test]
        fn test_quoted_local_part() {
            assert!(FieldKind::Email.is_valid("\"john smith\"@ya.ru"));
        }

        #[test]
        fn test_malformed_addresses_are_rejected() {
            assert!(!FieldKind::Email.is_valid("yandex.ru"));
            assert!(!FieldKind::Email.is_valid("@yandex.ru"));
            assert!(!FieldKind::Email.is_valid("user name@yandex.ru"));
            assert!(!FieldKind::Email.is_valid("user@"));
        }

        #[test]
        fn test_domain_match_is_case_sensitive() {
            // Inherited verbatim from the original pattern: the domain
            // comparison is case-sensitive, so an uppercase domain fails.
            assert!(!FieldKind::Email.is_valid("user@YA.RU"));
            assert!(!FieldKind::Email.is_valid("user@Yandex.ru"));
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_pattern_and_digit_sum_both_hold() {
            // 7+1*10 = 17
            assert!(FieldKind::Phone.is_valid("+7(111)111-11-11"));
            // 7+9+9+5 = 30, exactly at the limit
            assert!(FieldKind::Phone.is_valid("+7(995)000-00-00"));
        }

        #[test]
        fn test_digit_sum_above_limit_is_rejected() {
            // 7+9+9+6 = 31
            assert!(!FieldKind::Phone.is_valid("+7(996)000-00-00"));
            // Pattern matches but the sum is 106
            assert!(!FieldKind::Phone.is_valid("+7(999)999-99-99"));
        }

        #[test]
        fn test_wrong_format_is_rejected() {
            assert!(!FieldKind::Phone.is_valid("+8(111)111-11-11"));
            assert!(!FieldKind::Phone.is_valid("+7(111)1111111"));
            assert!(!FieldKind::Phone.is_valid("+7 (111) 111-11-11"));
            assert!(!FieldKind::Phone.is_valid("8(111)111-11-11"));
        }

        #[test]
        fn test_no_digits_passes_sum_check_but_fails_pattern() {
            assert!(!FieldKind::Phone.is_valid(""));
            assert!(!FieldKind::Phone.is_valid("not a phone"));
        }
    }
}
