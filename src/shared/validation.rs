//! Validation Utilities
//!
//! An ordered pipeline of request steps. Checks are pure; a pipeline may carry
//! normalization steps that rewrite the payload in place. The first failing
//! check stops the run.

use super::error::ValidationError;

/// A single pipeline step over a request payload.
pub enum Step<T> {
    /// Pure check over the payload.
    Check(fn(&T) -> Result<(), ValidationError>),

    /// In-place rewrite of the payload. Never fails.
    Normalize(fn(&mut T)),
}

/// Run `steps` in order over `payload`, returning the first failure.
pub fn run_pipeline<T>(payload: &mut T, steps: &[Step<T>]) -> Result<(), ValidationError> {
    for step in steps {
        match step {
            Step::Check(check) => check(payload)?,
            Step::Normalize(normalize) => normalize(payload),
        }
    }
    Ok(())
}

/// `Some("")` is empty, `None` is not: nullness is checked separately.
pub fn is_empty_str(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Payload {
        value: Option<i32>,
        touched: bool,
    }

    fn value_present(p: &Payload) -> Result<(), ValidationError> {
        p.value.map(|_| ()).ok_or(ValidationError::ChatUserIsNull)
    }

    fn value_positive(p: &Payload) -> Result<(), ValidationError> {
        match p.value {
            Some(v) if v <= 0 => Err(ValidationError::ChatUsersIsEmpty),
            _ => Ok(()),
        }
    }

    fn touch(p: &mut Payload) {
        p.touched = true;
    }

    #[test]
    fn test_pipeline_passes_and_normalizes() {
        let mut payload = Payload {
            value: Some(3),
            ..Default::default()
        };
        let steps = [
            Step::Check(value_present),
            Step::Check(value_positive),
            Step::Normalize(touch),
        ];

        assert_eq!(run_pipeline(&mut payload, &steps), Ok(()));
        assert!(payload.touched);
    }

    #[test]
    fn test_pipeline_stops_at_first_failure() {
        let mut payload = Payload::default();
        let steps = [
            Step::Check(value_present),
            Step::Check(value_positive),
            Step::Normalize(touch),
        ];

        assert_eq!(
            run_pipeline(&mut payload, &steps),
            Err(ValidationError::ChatUserIsNull)
        );
        assert!(!payload.touched);
    }

    #[test]
    fn test_order_decides_reported_error() {
        let mut payload = Payload {
            value: Some(-1),
            ..Default::default()
        };
        let steps = [Step::Check(value_positive), Step::Check(value_present)];

        assert_eq!(
            run_pipeline(&mut payload, &steps),
            Err(ValidationError::ChatUsersIsEmpty)
        );
    }

    #[test]
    fn test_is_empty_str() {
        assert!(is_empty_str(&Some(String::new())));
        assert!(!is_empty_str(&None));
        assert!(!is_empty_str(&Some("alice".into())));
    }
}
