//! Wire shapes of the catalog REST API (camelCase JSON).

use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductDraft};
use business::domain::session::model::{Credentials, User};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequestDto<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequestDto<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub id: u64,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
    // Older backends answer with `token`.
    #[serde(alias = "token")]
    pub access_token: Option<String>,
}

impl From<LoginResponseDto> for User {
    fn from(dto: LoginResponseDto) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            image: dto.image,
            access_token: dto.access_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: ProductId::new(dto.id),
            title: dto.title,
            description: dto.description,
            price: dto.price,
            discount_percentage: dto.discount_percentage,
            rating: dto.rating,
            stock: dto.stock,
            brand: dto.brand,
            category: dto.category,
            thumbnail: dto.thumbnail,
            images: dto.images,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListDto {
    pub products: Vec<ProductDto>,
}

/// Single-product responses come bare or wrapped in `{ "product": ... }`
/// depending on the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductEnvelope {
    Wrapped { product: ProductDto },
    Bare(ProductDto),
}

impl From<ProductEnvelope> for Product {
    fn from(envelope: ProductEnvelope) -> Self {
        match envelope {
            ProductEnvelope::Wrapped { product } | ProductEnvelope::Bare(product) => product.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletedProductDto {
    pub id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayloadDto<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<&'a str>,
    pub category: &'a str,
    pub thumbnail: &'a str,
    pub images: &'a [String],
}

impl<'a> From<&'a ProductDraft> for ProductPayloadDto<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            price: draft.price,
            discount_percentage: draft.discount_percentage,
            rating: draft.rating,
            stock: draft.stock,
            brand: draft.brand.as_deref(),
            category: &draft.category,
            thumbnail: &draft.thumbnail,
            images: &draft.images,
        }
    }
}
