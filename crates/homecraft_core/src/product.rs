//! Product record and draft types.

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
///
/// Ids are assigned by the store from a monotonic counter and are unique among
/// live products; they are never reused after deletion, so gaps are possible
/// and expected.
///
/// # Examples
///
/// ```
/// use homecraft_core::ProductId;
///
/// let id = ProductId::from(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(format!("{}", id), "3");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Get the numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A catalog entry.
///
/// Field order mirrors the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier among live products
    pub id: ProductId,
    /// Product title (non-empty)
    pub title: String,
    /// Image URL
    pub img: String,
    /// Price, strictly positive
    pub price: f64,
    /// Short product description (non-empty)
    pub description: String,
    /// Rating in [1, 5]
    pub rate: u8,
}

/// A fully-populated product except for its id.
///
/// Drafts are what the form and the CLI submit; the store assigns the id on
/// `add`, and `update` pairs a draft's fields with an existing id.
///
/// # Examples
///
/// ```
/// use homecraft_core::ProductDraft;
///
/// let draft = ProductDraft::builder()
///     .title("Shoe")
///     .price(100000.0)
///     .img("http://x/y.png")
///     .rate(4)
///     .description("desc")
///     .build();
///
/// assert_eq!(draft.title, "Shoe");
/// let product = draft.into_product(1.into());
/// assert_eq!(product.id.value(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product title
    pub title: String,
    /// Image URL
    pub img: String,
    /// Price
    pub price: f64,
    /// Short product description
    pub description: String,
    /// Rating in [1, 5]
    pub rate: u8,
}

impl ProductDraft {
    /// Creates a new draft builder.
    pub fn builder() -> ProductDraftBuilder {
        ProductDraftBuilder::default()
    }

    /// Attach an id to this draft, producing a full product.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            img: self.img,
            price: self.price,
            description: self.description,
            rate: self.rate,
        }
    }
}

impl From<&Product> for ProductDraft {
    /// Strip the id from a product, e.g. to pre-fill the edit form.
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            img: product.img.clone(),
            price: product.price,
            description: product.description.clone(),
            rate: product.rate,
        }
    }
}

/// Builder for `ProductDraft`.
#[derive(Debug, Default)]
pub struct ProductDraftBuilder {
    title: Option<String>,
    img: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    rate: Option<u8>,
}

impl ProductDraftBuilder {
    /// Sets the title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets the image URL.
    pub fn img(mut self, value: impl Into<String>) -> Self {
        self.img = Some(value.into());
        self
    }

    /// Sets the price.
    pub fn price(mut self, value: f64) -> Self {
        self.price = Some(value);
        self
    }

    /// Sets the description.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Sets the rating.
    pub fn rate(mut self, value: u8) -> Self {
        self.rate = Some(value);
        self
    }

    /// Builds the `ProductDraft`, defaulting unset fields to empty/zero.
    pub fn build(self) -> ProductDraft {
        ProductDraft {
            title: self.title.unwrap_or_default(),
            img: self.img.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            rate: self.rate.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 7.into(),
            title: "Lamp".to_string(),
            img: "http://img.example/lamp.png".to_string(),
            price: 250000.0,
            description: "A desk lamp".to_string(),
            rate: 5,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Lamp");
        assert_eq!(json["rate"], 5);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_draft_round_trip_preserves_fields() {
        let product = Product {
            id: 2.into(),
            title: "Chair".to_string(),
            img: "https://img.example/chair.png".to_string(),
            price: 99.5,
            description: "Wooden chair".to_string(),
            rate: 3,
        };

        let draft = ProductDraft::from(&product);
        let rebuilt = draft.into_product(product.id);
        assert_eq!(rebuilt, product);
    }
}
