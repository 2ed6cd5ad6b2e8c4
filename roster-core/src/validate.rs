//! Draft validation for the roster engine.
//!
//! All rules run independently (no short-circuit) so every violated field is
//! reported at once. The id field is not checked here - the collection store
//! verifies presence and shape at submit time.

use roster_types::{Draft, Field};
use std::collections::BTreeMap;

/// Field-level validation failures, iterated in form order.
///
/// An empty map means the draft is valid.
pub type ValidationErrors = BTreeMap<Field, String>;

/// Check a draft against the field rules.
///
/// Pure and deterministic - the same draft always produces the same result.
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.first_name.is_empty() {
        errors.insert(Field::FirstName, "* First Name is required".to_string());
    }
    if draft.last_name.is_empty() {
        errors.insert(Field::LastName, "* Last Name is required".to_string());
    }
    if draft.email.is_empty() {
        errors.insert(Field::Email, "* Email is required".to_string());
    } else if !email_shape_ok(&draft.email) {
        errors.insert(Field::Email, "* Email format is invalid".to_string());
    }
    if draft.department.is_empty() {
        errors.insert(Field::Department, "* Department is required".to_string());
    }

    errors
}

/// Substring search for a `<non-ws>@<non-ws>.<non-ws>` shape.
///
/// Deliberately shallow: anything resembling `local@domain.tld` anywhere in
/// the text passes. Full address grammar is out of scope.
fn email_shape_ok(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    for at in 1..chars.len() {
        if chars[at] != '@' || chars[at - 1].is_whitespace() {
            continue;
        }
        // After the '@': at least one non-ws char, a dot, one non-ws char.
        let mut seen = 0usize;
        let mut j = at + 1;
        while j < chars.len() && !chars[j].is_whitespace() {
            if chars[j] == '.' && seen > 0 && j + 1 < chars.len() && !chars[j + 1].is_whitespace() {
                return true;
            }
            seen += 1;
            j += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> Draft {
        let mut draft = Draft::new();
        draft.set(Field::Id, "11");
        draft.set(Field::FirstName, "A");
        draft.set(Field::LastName, "B");
        draft.set(Field::Email, "a@b.example");
        draft.set(Field::Department, "C");
        draft
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        for field in [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Department,
        ] {
            let mut draft = complete_draft();
            draft.set(field, "");

            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "expected one error for {field}");
            assert!(errors.contains_key(&field));
        }
    }

    #[test]
    fn all_violations_reported_simultaneously() {
        let errors = validate(&Draft::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::FirstName], "* First Name is required");
        assert_eq!(errors[&Field::LastName], "* Last Name is required");
        assert_eq!(errors[&Field::Email], "* Email is required");
        assert_eq!(errors[&Field::Department], "* Department is required");
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let mut draft = complete_draft();
        draft.set(Field::Email, "bad");

        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], "* Email format is invalid");
    }

    #[test]
    fn missing_id_is_not_a_validation_error() {
        let mut draft = complete_draft();
        draft.set(Field::Id, "");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn email_shapes() {
        assert!(email_shape_ok("user@mail.example.com"));
        assert!(email_shape_ok("a@b.c"));
        // Search semantics: a valid shape anywhere in the text passes.
        assert!(email_shape_ok("contact a@b.c please"));
        assert!(email_shape_ok("a@b..c"));

        assert!(!email_shape_ok("plain"));
        assert!(!email_shape_ok("a@b"));
        assert!(!email_shape_ok("a@.c"));
        assert!(!email_shape_ok("@b.c"));
        assert!(!email_shape_ok("a@b .c"));
        assert!(!email_shape_ok("a @b.c"));
    }

    #[test]
    fn same_draft_same_result() {
        let mut draft = complete_draft();
        draft.set(Field::Email, "odd");
        assert_eq!(validate(&draft), validate(&draft));
    }
}
