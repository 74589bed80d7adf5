use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Content preferences submitted to start a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub area_of_interest: String,
    pub content_type: String,
    pub keywords: Vec<String>,
    pub post_frequency: i64,
}

/// Raw user-input fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct UserInputForm {
    pub area_of_interest: String,
    pub content_type: String,
    /// Comma separated.
    pub keywords: String,
    pub post_frequency: String,
}

impl UserInputForm {
    /// Coerce the raw fields into a payload.
    ///
    /// Keywords are split on commas and trimmed; empty pieces are kept.
    /// `post_frequency` takes the leading integer of the field and ignores
    /// whatever follows it.
    pub fn coerce(&self) -> Result<UserInput, FormError> {
        let post_frequency = leading_integer(&self.post_frequency).map_err(|e| {
            let field = "post_frequency";
            let value = self.post_frequency.clone();
            match e {
                IntError::NoDigits => FormError::NotAnInteger { field, value },
                IntError::Overflow => FormError::OutOfRange { field, value },
            }
        })?;

        Ok(UserInput {
            area_of_interest: self.area_of_interest.clone(),
            content_type: self.content_type.clone(),
            keywords: split_keywords(&self.keywords),
            post_frequency,
        })
    }
}

pub(crate) fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|k| k.trim().to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntError {
    NoDigits,
    Overflow,
}

/// `"  42px"` -> 42, `"-3"` -> -3, `"abc"` -> `NoDigits`.
pub(crate) fn leading_integer(raw: &str) -> Result<i64, IntError> {
    let s = raw.trim_start();
    let sign_len = match s.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };

    let rest = &s[sign_len..];
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(IntError::NoDigits);
    }

    // Sign and digits parse together so i64::MIN fits.
    s[..sign_len + digits_end]
        .parse::<i64>()
        .map_err(|_| IntError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(keywords: &str, post_frequency: &str) -> UserInputForm {
        UserInputForm {
            area_of_interest: "tech".to_string(),
            content_type: "blog".to_string(),
            keywords: keywords.to_string(),
            post_frequency: post_frequency.to_string(),
        }
    }

    #[test]
    fn test_coerce_splits_and_trims_keywords() {
        let input = form("ai, ml", "3").coerce().unwrap();
        assert_eq!(input.keywords, vec!["ai", "ml"]);
        assert_eq!(input.post_frequency, 3);
        assert_eq!(input.area_of_interest, "tech");
        assert_eq!(input.content_type, "blog");
    }

    #[test]
    fn test_empty_keyword_pieces_are_kept() {
        let input = form("rust,, ", "1").coerce().unwrap();
        assert_eq!(input.keywords, vec!["rust", "", ""]);

        let input = form("", "1").coerce().unwrap();
        assert_eq!(input.keywords, vec![""]);
    }

    #[test]
    fn test_post_frequency_takes_leading_integer() {
        assert_eq!(leading_integer("7"), Ok(7));
        assert_eq!(leading_integer("  12 per week"), Ok(12));
        assert_eq!(leading_integer("3.9"), Ok(3));
        assert_eq!(leading_integer("-2"), Ok(-2));
        assert_eq!(leading_integer("+5"), Ok(5));
    }

    #[test]
    fn test_post_frequency_full_i64_range() {
        assert_eq!(leading_integer("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(leading_integer("9223372036854775807 times"), Ok(i64::MAX));
    }

    #[test]
    fn test_post_frequency_overflow_is_out_of_range() {
        for raw in ["99999999999999999999", "-9223372036854775809"] {
            let err = form("ai", raw).coerce().unwrap_err();
            assert_eq!(
                err,
                FormError::OutOfRange {
                    field: "post_frequency",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_post_frequency_without_digits_fails() {
        for raw in ["", "weekly", "-", " x3"] {
            let err = form("ai", raw).coerce().unwrap_err();
            assert_eq!(
                err,
                FormError::NotAnInteger {
                    field: "post_frequency",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_payload_serializes_with_wire_field_names() {
        let input = form("ai, ml", "3").coerce().unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "area_of_interest": "tech",
                "content_type": "blog",
                "keywords": ["ai", "ml"],
                "post_frequency": 3
            })
        );
    }
}
