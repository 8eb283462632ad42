use crate::errors::{require_field, AppError};

/// Validated product input shared by question generation and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub product_name: String,
    pub description: String,
}

impl ProductInfo {
    /// Both fields must be present and non-blank.
    pub fn require_all(
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            product_name: require_field(product_name, "product_name")?,
            description: require_field(description, "description")?,
        })
    }

    /// Only the name is required; a missing description becomes empty.
    pub fn require_name(
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            product_name: require_field(product_name, "product_name")?,
            description: description.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    /// No field is required; missing values become empty.
    pub fn lenient(product_name: Option<&str>, description: Option<&str>) -> Self {
        Self {
            product_name: product_name.map(str::trim).unwrap_or_default().to_string(),
            description: description.map(str::trim).unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_all_rejects_missing_description() {
        let err = ProductInfo::require_all(Some("Bottle"), None).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_require_all_checks_name_first() {
        let err = ProductInfo::require_all(None, None).unwrap_err();
        assert!(err.to_string().contains("product_name"));
    }

    #[test]
    fn test_require_name_defaults_description() {
        let product = ProductInfo::require_name(Some(" Tote "), None).unwrap();
        assert_eq!(product.product_name, "Tote");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_lenient_accepts_nothing() {
        let product = ProductInfo::lenient(None, Some(" 1L "));
        assert_eq!(product.product_name, "");
        assert_eq!(product.description, "1L");
    }
}
