use std::collections::BTreeMap;

/// Field-keyed validation failures.
///
/// Backed by an ordered map so reporting is stable. Nested target failures
/// use positional keys (`targets[1].weight`); validation fails fast at the
/// first offending target, so at most one target's failures appear.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub(crate) fn new() -> Self {
        ValidationErrors(BTreeMap::new())
    }

    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub(crate) fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ok when no failure was recorded.
    pub(crate) fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Records a failure unless `value`, after trimming, is at least `min`
/// characters long.
pub(crate) fn check_min_len(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: usize,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, "is required");
    } else if trimmed.chars().count() < min {
        errors.push(field, format!("must be at least {min} characters"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_min_len_distinguishes_missing_from_too_short() {
        let mut errors = ValidationErrors::new();
        check_min_len(&mut errors, "code", "   ", 2);
        check_min_len(&mut errors, "name", "x", 2);
        check_min_len(&mut errors, "memo", "ok", 2);
        assert_eq!(errors.message("code"), Some("is required"));
        assert_eq!(errors.message("name"), Some("must be at least 2 characters"));
        assert_eq!(errors.message("memo"), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn display_joins_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("code", "is required");
        errors.push("name", "is required");
        assert_eq!(errors.to_string(), "code: is required; name: is required");
    }
}
