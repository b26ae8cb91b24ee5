use url::Url;

use super::model::{Product, ProductDraft};

const DEFAULT_IMAGE_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Price,
    DiscountPercentage,
    Rating,
    Stock,
    Brand,
    Category,
    Thumbnail,
    Image(usize),
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Title => write!(f, "Product Title"),
            FormField::Description => write!(f, "Description"),
            FormField::Price => write!(f, "Price"),
            FormField::DiscountPercentage => write!(f, "Discount Percentage"),
            FormField::Rating => write!(f, "Rating"),
            FormField::Stock => write!(f, "Stock"),
            FormField::Brand => write!(f, "Brand"),
            FormField::Category => write!(f, "Category"),
            FormField::Thumbnail => write!(f, "Thumbnail URL"),
            FormField::Image(index) => write!(f, "Image URL {}", index + 1),
        }
    }
}

/// Per-field validation marker shown next to the offending input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("{0} must be a number")]
    NotANumber(FormField),
    #[error("{0} must be a whole number")]
    NotAnInteger(FormField),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: FormField, min: f64, max: f64 },
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: FormField, min: f64 },
    #[error("{0} must be a valid URL")]
    InvalidUrl(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Required(field)
            | FieldError::NotANumber(field)
            | FieldError::NotAnInteger(field)
            | FieldError::InvalidUrl(field) => *field,
            FieldError::OutOfRange { field, .. } | FieldError::BelowMinimum { field, .. } => *field,
        }
    }
}

/// Raw text inputs of the create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub stock: String,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            discount_percentage: String::new(),
            rating: String::new(),
            stock: String::new(),
            brand: String::new(),
            category: String::new(),
            thumbnail: String::new(),
            images: vec![String::new(); DEFAULT_IMAGE_SLOTS],
        }
    }
}

impl ProductForm {
    /// Prefills the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        let mut images = product.images.clone();
        if images.len() < DEFAULT_IMAGE_SLOTS {
            images.resize(DEFAULT_IMAGE_SLOTS, String::new());
        }

        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            discount_percentage: product.discount_percentage.to_string(),
            rating: product.rating.to_string(),
            stock: product.stock.to_string(),
            brand: product.brand.clone().unwrap_or_default(),
            category: product.category.clone(),
            thumbnail: product.thumbnail.clone(),
            images,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::DiscountPercentage => self.discount_percentage = value,
            FormField::Rating => self.rating = value,
            FormField::Stock => self.stock = value,
            FormField::Brand => self.brand = value,
            FormField::Category => self.category = value,
            FormField::Thumbnail => self.thumbnail = value,
            FormField::Image(index) => {
                self.set_image(index, value);
            }
        }
    }

    /// Fills an existing image slot. Returns `false` for an index past the
    /// last slot, leaving the form untouched.
    pub fn set_image(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.images.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// URLs to preview: the thumbnail, then every filled image slot that parses.
    pub fn image_previews(&self) -> Vec<&str> {
        std::iter::once(self.thumbnail.as_str())
            .chain(self.images.iter().map(String::as_str))
            .map(str::trim)
            .filter(|candidate| !candidate.is_empty() && Url::parse(candidate).is_ok())
            .collect()
    }

    pub fn validate(&self) -> Vec<FieldError> {
        match self.to_draft() {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Parses the inputs into a draft, collecting every field error.
    /// Empty image slots are dropped.
    pub fn to_draft(&self) -> Result<ProductDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = required(&self.title, FormField::Title, &mut errors);
        let brand = required(&self.brand, FormField::Brand, &mut errors);
        let category = required(&self.category, FormField::Category, &mut errors);
        let description = required(&self.description, FormField::Description, &mut errors);
        let thumbnail = required(&self.thumbnail, FormField::Thumbnail, &mut errors);
        if !thumbnail.is_empty() && Url::parse(&thumbnail).is_err() {
            errors.push(FieldError::InvalidUrl(FormField::Thumbnail));
        }

        let price = number(&self.price, FormField::Price, true, &mut errors)
            .filter(|price| at_least(*price, 0.0, FormField::Price, &mut errors));
        let discount_percentage =
            number(&self.discount_percentage, FormField::DiscountPercentage, false, &mut errors)
                .filter(|value| {
                    within(*value, 0.0, 100.0, FormField::DiscountPercentage, &mut errors)
                });
        let rating = number(&self.rating, FormField::Rating, false, &mut errors)
            .filter(|value| within(*value, 0.0, 5.0, FormField::Rating, &mut errors));
        let stock = whole_number(&self.stock, FormField::Stock, &mut errors);

        let mut images = Vec::new();
        for (index, image) in self.images.iter().enumerate() {
            let image = image.trim();
            if image.is_empty() {
                continue;
            }
            if Url::parse(image).is_err() {
                errors.push(FieldError::InvalidUrl(FormField::Image(index)));
            }
            images.push(image.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductDraft {
            title,
            description,
            price: price.unwrap_or_default(),
            discount_percentage: discount_percentage.unwrap_or_default(),
            rating: rating.unwrap_or_default(),
            stock: stock.unwrap_or_default(),
            brand: Some(brand),
            category,
            thumbnail,
            images,
        })
    }
}

fn required(value: &str, field: FormField, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::Required(field));
    }
    trimmed.to_string()
}

/// Parses a decimal input. Blank optional inputs read as zero.
fn number(
    value: &str,
    field: FormField,
    is_required: bool,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if is_required {
            errors.push(FieldError::Required(field));
            return None;
        }
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            errors.push(FieldError::NotANumber(field));
            None
        }
    }
}

fn whole_number(value: &str, field: FormField, errors: &mut Vec<FieldError>) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::Required(field));
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return match u32::try_from(parsed) {
            Ok(stock) => Some(stock),
            Err(_) if parsed < 0 => {
                errors.push(FieldError::BelowMinimum { field, min: 0.0 });
                None
            }
            Err(_) => {
                errors.push(FieldError::OutOfRange {
                    field,
                    min: 0.0,
                    max: f64::from(u32::MAX),
                });
                None
            }
        };
    }
    if trimmed.parse::<f64>().is_ok() {
        errors.push(FieldError::NotAnInteger(field));
    } else {
        errors.push(FieldError::NotANumber(field));
    }
    None
}

fn at_least(value: f64, min: f64, field: FormField, errors: &mut Vec<FieldError>) -> bool {
    if value < min {
        errors.push(FieldError::BelowMinimum { field, min });
        return false;
    }
    true
}

fn within(value: f64, min: f64, max: f64, field: FormField, errors: &mut Vec<FieldError>) -> bool {
    if value < min || value > max {
        errors.push(FieldError::OutOfRange { field, min, max });
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::default();
        form.set_field(FormField::Title, "Essence Mascara");
        form.set_field(FormField::Brand, "Essence");
        form.set_field(FormField::Category, "beauty");
        form.set_field(FormField::Price, "9.99");
        form.set_field(FormField::DiscountPercentage, "7.17");
        form.set_field(FormField::Rating, "4.94");
        form.set_field(FormField::Stock, "5");
        form.set_field(FormField::Description, "Lengthening mascara");
        form.set_field(FormField::Thumbnail, "https://cdn.example.com/1/thumb.png");
        form
    }

    fn fields(errors: &[FieldError]) -> Vec<FormField> {
        errors.iter().map(FieldError::field).collect()
    }

    #[test]
    fn should_build_draft_from_valid_form() {
        let mut form = filled_form();
        form.set_field(FormField::Image(1), "https://cdn.example.com/1/1.png");

        let draft = form.to_draft().unwrap();

        assert_eq!(draft.title, "Essence Mascara");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.stock, 5);
        assert_eq!(draft.brand.as_deref(), Some("Essence"));
        assert_eq!(draft.images, vec!["https://cdn.example.com/1/1.png"]);
    }

    #[test]
    fn should_mark_every_missing_required_field() {
        let errors = ProductForm::default().validate();

        let marked = fields(&errors);
        for field in [
            FormField::Title,
            FormField::Brand,
            FormField::Category,
            FormField::Description,
            FormField::Thumbnail,
            FormField::Price,
            FormField::Stock,
        ] {
            assert!(marked.contains(&field), "missing marker for {}", field);
        }
        assert!(!marked.contains(&FormField::Rating));
        assert!(!marked.contains(&FormField::DiscountPercentage));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut form = filled_form();
        form.set_field(FormField::Price, "-1");

        let errors = form.validate();

        assert_eq!(
            errors,
            vec![FieldError::BelowMinimum {
                field: FormField::Price,
                min: 0.0
            }]
        );
    }

    #[test]
    fn should_reject_discount_above_hundred_and_rating_above_five() {
        let mut form = filled_form();
        form.set_field(FormField::DiscountPercentage, "101");
        form.set_field(FormField::Rating, "5.1");

        let marked = fields(&form.validate());

        assert_eq!(marked, vec![FormField::DiscountPercentage, FormField::Rating]);
    }

    #[test]
    fn should_accept_range_boundaries() {
        let mut form = filled_form();
        form.set_field(FormField::Price, "0");
        form.set_field(FormField::DiscountPercentage, "100");
        form.set_field(FormField::Rating, "0");
        form.set_field(FormField::Stock, "0");

        assert!(form.validate().is_empty());
    }

    #[test]
    fn should_reject_fractional_and_negative_stock() {
        let mut form = filled_form();
        form.set_field(FormField::Stock, "2.5");
        assert_eq!(
            form.validate(),
            vec![FieldError::NotAnInteger(FormField::Stock)]
        );

        form.set_field(FormField::Stock, "-3");
        assert_eq!(
            form.validate(),
            vec![FieldError::BelowMinimum {
                field: FormField::Stock,
                min: 0.0
            }]
        );
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let mut form = filled_form();
        form.set_field(FormField::Price, "cheap");
        assert_eq!(form.validate(), vec![FieldError::NotANumber(FormField::Price)]);
    }

    #[test]
    fn should_reject_malformed_image_url() {
        let mut form = filled_form();
        form.set_field(FormField::Image(2), "not a url");
        assert_eq!(
            form.validate(),
            vec![FieldError::InvalidUrl(FormField::Image(2))]
        );
    }

    #[test]
    fn should_prefill_from_existing_product_with_three_image_slots() {
        let product = Product::from_draft(ProductId::new(3), filled_form().to_draft().unwrap());

        let form = ProductForm::from_product(&product);

        assert_eq!(form.title, "Essence Mascara");
        assert_eq!(form.price, "9.99");
        assert_eq!(form.stock, "5");
        assert_eq!(form.images.len(), 3);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn should_preview_thumbnail_and_filled_images() {
        let mut form = filled_form();
        form.set_field(FormField::Image(0), "https://cdn.example.com/1/1.png");
        form.set_field(FormField::Image(1), "broken");

        assert_eq!(
            form.image_previews(),
            vec![
                "https://cdn.example.com/1/thumb.png",
                "https://cdn.example.com/1/1.png"
            ]
        );
    }

    #[test]
    fn should_ignore_image_index_past_last_slot() {
        // Arrange
        let mut form = filled_form();

        // Act
        let filled = form.set_image(2, "https://cdn.example.com/1/2.png");
        let past_end = form.set_image(3, "https://cdn.example.com/1/3.png");
        form.set_field(FormField::Image(usize::MAX), "https://cdn.example.com/1/4.png");

        // Assert
        assert!(filled);
        assert!(!past_end);
        assert_eq!(form.images.len(), 3);
        assert_eq!(form.images[2], "https://cdn.example.com/1/2.png");
    }

    #[test]
    fn should_render_field_error_messages() {
        let error = FieldError::OutOfRange {
            field: FormField::Rating,
            min: 0.0,
            max: 5.0,
        };
        assert_eq!(error.to_string(), "Rating must be between 0 and 5");
    }
}
