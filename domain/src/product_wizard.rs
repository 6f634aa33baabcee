//! Product add/edit wizard.
//!
//! Holds the raw input of the product form while the user steps through
//! it, validates each step, and turns the finished draft into a create or
//! update request.

use shared::{Product, ProductPayload, ProductUpsert, RecordStatus};
use tracing::info;

use crate::form_mode::FormMode;
use crate::wizard::{FieldError, ValidationErrors, Wizard, WizardError, WizardForm};

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_IMAGES: usize = 8;
pub const MAX_PRICE: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStep {
    General,
    Pricing,
    Media,
    Review,
}

impl ProductStep {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStep::General => "General",
            ProductStep::Pricing => "Pricing & stock",
            ProductStep::Media => "Images",
            ProductStep::Review => "Review",
        }
    }
}

/// Raw product form input; numeric fields stay as typed until submit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub price: String,
    pub stock: String,
    pub image_urls: Vec<String>,
    pub status: RecordStatus,
}

impl ProductDraft {
    pub fn from_mode(mode: &FormMode<Product>) -> Self {
        match mode {
            FormMode::Add => ProductDraft::default(),
            FormMode::Edit(product) => ProductDraft {
                id: Some(product.id),
                name: product.name.clone(),
                sku: product.sku.clone(),
                description: product.description.clone(),
                category_id: product.category.as_ref().map(|c| c.id),
                brand_id: product.brand.as_ref().map(|b| b.id),
                price: format!("{:.2}", product.price),
                stock: product.stock.to_string(),
                image_urls: product.image_urls.clone(),
                status: product.status,
            },
        }
    }

    /// Wizard for this mode. Editing unlocks every step.
    pub fn wizard(mode: &FormMode<Product>) -> Wizard<ProductDraft> {
        let draft = ProductDraft::from_mode(mode);
        if mode.is_edit() {
            Wizard::unlocked(draft)
        } else {
            Wizard::new(draft)
        }
    }

    /// Parse a price as typed, tolerating `$`, thousands separators and spaces
    pub fn parse_price(input: &str) -> Result<f64, FieldError> {
        let cleaned = input.trim().replace(['$', ',', ' '], "");
        if cleaned.is_empty() {
            return Err(FieldError::new("price", "Please enter a price"));
        }
        let price = cleaned
            .parse::<f64>()
            .map_err(|_| FieldError::new("price", format!("\"{}\" is not a valid price", input.trim())))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(FieldError::new("price", "Price must be greater than 0"));
        }
        if price > MAX_PRICE {
            return Err(FieldError::new("price", "Price is too large"));
        }
        Ok(price)
    }

    pub fn parse_stock(input: &str) -> Result<u32, FieldError> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|_| FieldError::new("stock", "Stock must be a whole number of 0 or more"))
    }

    /// Validate every step and build the request for the backend
    pub fn to_upsert(&self) -> Result<ProductUpsert, WizardError<ProductStep>> {
        for &step in ProductDraft::steps() {
            self.validate_step(step)
                .map_err(|errors| WizardError::InvalidStep { step, errors })?;
        }

        let invalid = |errors| WizardError::InvalidStep {
            step: ProductStep::Pricing,
            errors,
        };
        let price = ProductDraft::parse_price(&self.price).map_err(|e| invalid(vec![e]))?;
        let stock = ProductDraft::parse_stock(&self.stock).map_err(|e| invalid(vec![e]))?;
        let category_id = self.category_id.ok_or_else(|| WizardError::InvalidStep {
            step: ProductStep::General,
            errors: vec![FieldError::new("category_id", "Please choose a category")],
        })?;

        let product = ProductPayload {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            description: self.description.trim().to_string(),
            category_id,
            brand_id: self.brand_id,
            price,
            stock,
            image_urls: self.image_urls.clone(),
            status: self.status,
        };

        let request = match self.id {
            Some(id) => ProductUpsert::Update { id, product },
            None => ProductUpsert::Create { product },
        };
        info!("Product wizard submitted: {:?}", self.id);
        Ok(request)
    }
}

impl WizardForm for ProductDraft {
    type Step = ProductStep;

    fn steps() -> &'static [ProductStep] {
        &[
            ProductStep::General,
            ProductStep::Pricing,
            ProductStep::Media,
            ProductStep::Review,
        ]
    }

    fn validate_step(&self, step: ProductStep) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        match step {
            ProductStep::General => {
                let name = self.name.trim();
                if name.is_empty() {
                    errors.push(FieldError::new("name", "Please enter a product name"));
                } else if name.chars().count() > MAX_NAME_LEN {
                    errors.push(FieldError::new(
                        "name",
                        format!("Name is too long. Maximum is {} characters.", MAX_NAME_LEN),
                    ));
                }

                let sku = self.sku.trim();
                if sku.is_empty() {
                    errors.push(FieldError::new("sku", "Please enter a SKU"));
                } else if sku.chars().any(char::is_whitespace) {
                    errors.push(FieldError::new("sku", "SKU cannot contain spaces"));
                }

                if self.category_id.is_none() {
                    errors.push(FieldError::new("category_id", "Please choose a category"));
                }
            }
            ProductStep::Pricing => {
                if let Err(e) = ProductDraft::parse_price(&self.price) {
                    errors.push(e);
                }
                if let Err(e) = ProductDraft::parse_stock(&self.stock) {
                    errors.push(e);
                }
            }
            ProductStep::Media => {
                if self.image_urls.len() > MAX_IMAGES {
                    errors.push(FieldError::new(
                        "image_urls",
                        format!("At most {} images can be attached", MAX_IMAGES),
                    ));
                }
                if self
                    .image_urls
                    .iter()
                    .any(|url| !(url.starts_with("https://") || url.starts_with("http://")))
                {
                    errors.push(FieldError::new("image_urls", "Image links must start with http:// or https://"));
                }
            }
            ProductStep::Review => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NamedRef;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "Business cards".to_string(),
            sku: "BC-100".to_string(),
            category_id: Some(3),
            price: "$1,250.50".to_string(),
            stock: "40".to_string(),
            ..ProductDraft::default()
        }
    }

    fn existing_product() -> Product {
        Product {
            id: 42,
            name: "Poster".to_string(),
            sku: "PST-A2".to_string(),
            description: "A2 matte".to_string(),
            category: Some(NamedRef { id: 5, name: "Posters".to_string() }),
            brand: None,
            price: 12.0,
            stock: 7,
            image_urls: vec!["https://cdn.mecarvi.test/pst.png".to_string()],
            status: RecordStatus::Inactive,
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(ProductDraft::parse_price("10.50").unwrap(), 10.50);
        assert_eq!(ProductDraft::parse_price(" $1,234.56 ").unwrap(), 1234.56);
        assert!(ProductDraft::parse_price("").is_err());
        assert!(ProductDraft::parse_price("abc").is_err());
        assert!(ProductDraft::parse_price("0").is_err());
        assert!(ProductDraft::parse_price("-3").is_err());
        assert!(ProductDraft::parse_price("250000").is_err());
    }

    #[test]
    fn test_general_step_errors() {
        let draft = ProductDraft {
            sku: "BC 100".to_string(),
            ..ProductDraft::default()
        };

        let errors = draft.validate_step(ProductStep::General).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "sku", "category_id"]);
    }

    #[test]
    fn test_media_step_rejects_bad_urls() {
        let draft = ProductDraft {
            image_urls: vec!["ftp://files/a.png".to_string()],
            ..filled_draft()
        };

        assert!(draft.validate_step(ProductStep::Media).is_err());
    }

    #[test]
    fn test_add_flow_builds_create_request() {
        let mut wizard = ProductDraft::wizard(&FormMode::Add);
        assert_eq!(wizard.go_to(ProductStep::Review), Err(WizardError::StepNotReached(ProductStep::Review)));

        *wizard.form_mut() = filled_draft();
        assert_eq!(wizard.next().unwrap(), ProductStep::Pricing);
        assert_eq!(wizard.next().unwrap(), ProductStep::Media);
        assert_eq!(wizard.next().unwrap(), ProductStep::Review);

        match wizard.submit().unwrap().to_upsert().unwrap() {
            ProductUpsert::Create { product } => {
                assert_eq!(product.price, 1250.50);
                assert_eq!(product.stock, 40);
                assert_eq!(product.category_id, 3);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_flow_builds_update_request() {
        let mode = FormMode::Edit(existing_product());
        let mut wizard = ProductDraft::wizard(&mode);

        assert_eq!(wizard.form().price, "12.00");
        wizard.go_to(ProductStep::Pricing).unwrap();
        wizard.form_mut().stock = "9".to_string();

        match wizard.submit().unwrap().to_upsert().unwrap() {
            ProductUpsert::Update { id, product } => {
                assert_eq!(id, 42);
                assert_eq!(product.stock, 9);
                assert_eq!(product.status, RecordStatus::Inactive);
                assert_eq!(product.image_urls.len(), 1);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_to_upsert_reports_failing_step() {
        let draft = ProductDraft {
            stock: "many".to_string(),
            ..filled_draft()
        };

        let err = draft.to_upsert().unwrap_err();
        assert!(matches!(err, WizardError::InvalidStep { step: ProductStep::Pricing, .. }));
    }
}
