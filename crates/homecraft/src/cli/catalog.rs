//! Catalog management command handlers.

use super::commands::OutputFormat;
use homecraft::{
    Catalog, FileBlobStore, HomecraftConfig, HomecraftResult, JsonError, JsonErrorKind,
    ProductDraft, ProductId, StorageError, StorageErrorKind, ValidationError, format_price,
    preview, stars, validate_draft,
};
use std::io::Write;

/// Open the catalog from the configured blob store.
fn open_catalog() -> HomecraftResult<Catalog> {
    let config = HomecraftConfig::load()?;
    let data_dir = config.storage().resolve_data_dir()?;
    let store = FileBlobStore::new(data_dir)?;
    Catalog::open(Box::new(store), config.storage().key.clone())
}

/// Reject a draft whose fields fail validation.
fn check_draft(draft: &ProductDraft) -> HomecraftResult<()> {
    let violations = validate_draft(draft);
    if violations.is_empty() {
        return Ok(());
    }
    let message = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ");
    Err(ValidationError::new(message).into())
}

/// Add a product to the catalog.
pub async fn handle_add(
    title: String,
    price: f64,
    img: String,
    rate: u8,
    description: String,
) -> HomecraftResult<()> {
    let draft = ProductDraft::builder()
        .title(title)
        .price(price)
        .img(img)
        .rate(rate)
        .description(description)
        .build();
    check_draft(&draft)?;

    let mut catalog = open_catalog()?;
    let id = catalog.add(draft)?;
    println!("Added product {}", id);

    Ok(())
}

/// List products, optionally filtered by a title query.
pub async fn handle_list(query: Option<&str>, format: OutputFormat) -> HomecraftResult<()> {
    let catalog = open_catalog()?;
    let products = catalog.search(query.unwrap_or(""));

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&products)
                .map_err(|e| JsonError::new(JsonErrorKind::OutputEncode(e.to_string())))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for product in &products {
                println!(
                    "{:>4}  {:<24}  {:>14}  {}  {}",
                    product.id,
                    product.title,
                    format_price(product.price),
                    stars(product.rate),
                    preview(&product.description, 55)
                );
            }
            println!("Total: {} products", products.len());
        }
    }

    Ok(())
}

/// Show a single product.
pub async fn handle_show(id: u64, format: OutputFormat) -> HomecraftResult<()> {
    let catalog = open_catalog()?;
    let id = ProductId::from(id);
    let Some(product) = catalog.get(id) else {
        return Err(StorageError::new(StorageErrorKind::NotFound(format!(
            "product {}",
            id
        )))
        .into());
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(product)
                .map_err(|e| JsonError::new(JsonErrorKind::OutputEncode(e.to_string())))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{} ({})", product.title, product.id);
            println!("  Price: {}", format_price(product.price));
            println!("  Rating: {}", stars(product.rate));
            println!("  Image: {}", product.img);
            println!("  Description: {}", product.description);
        }
    }

    Ok(())
}

/// Edit fields of an existing product.
///
/// Omitted flags keep their stored values.
pub async fn handle_edit(
    id: u64,
    title: Option<String>,
    price: Option<f64>,
    img: Option<String>,
    rate: Option<u8>,
    description: Option<String>,
) -> HomecraftResult<()> {
    let mut catalog = open_catalog()?;
    let id = ProductId::from(id);
    let Some(product) = catalog.get(id) else {
        return Err(StorageError::new(StorageErrorKind::NotFound(format!(
            "product {}",
            id
        )))
        .into());
    };

    let mut draft = ProductDraft::from(product);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(price) = price {
        draft.price = price;
    }
    if let Some(img) = img {
        draft.img = img;
    }
    if let Some(rate) = rate {
        draft.rate = rate;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    check_draft(&draft)?;

    catalog.update(draft.into_product(id))?;
    println!("Updated product {}", id);

    Ok(())
}

/// Remove a product after confirmation.
pub async fn handle_remove(id: u64, yes: bool) -> HomecraftResult<()> {
    let mut catalog = open_catalog()?;
    let id = ProductId::from(id);

    if !yes {
        let Some(product) = catalog.get(id) else {
            println!("No product with id {}", id);
            return Ok(());
        };
        print!("Delete \"{}\"? (y/n): ", product.title);
        std::io::stdout().flush().ok();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Cancelled");
            return Ok(());
        }
    }

    if catalog.remove(id)? {
        println!("Removed product {}", id);
    } else {
        println!("No product with id {}", id);
    }

    Ok(())
}
