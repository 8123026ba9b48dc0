//! End-to-end catalog flows driven headlessly through [`App`].

use homecraft_core::{FormField, ProductDraft};
use homecraft_store::{Catalog, FileBlobStore};
use homecraft_tui::{App, AppMode, FormBuffer};
use tempfile::TempDir;

fn open_catalog(dir: &TempDir) -> Catalog {
    let store = FileBlobStore::new(dir.path()).unwrap();
    Catalog::open(Box::new(store), "products").unwrap()
}

fn draft(title: &str, price: f64) -> ProductDraft {
    ProductDraft::builder()
        .title(title)
        .img("https://example.com/img.png")
        .price(price)
        .description("A catalog product")
        .rate(4)
        .build()
}

fn fill_form(app: &mut App, title: &str, price: &str) {
    let form = app.form.as_mut().unwrap();
    form.title = title.to_string();
    form.price = price.to_string();
    form.img = "https://example.com/img.png".to_string();
    form.rate = "4".to_string();
    form.description = "A catalog product".to_string();
}

#[test]
fn test_add_flow_creates_first_product() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    let mut app = App::new();

    app.open_add_form(&mut catalog).unwrap();
    assert_eq!(app.mode, AppMode::Form);
    assert!(catalog.selected().is_none());

    fill_form(&mut app, "Walnut Shelf", "250000");
    app.submit_form(&mut catalog).unwrap();

    assert_eq!(app.mode, AppMode::Browse);
    assert!(app.form.is_none());
    assert_eq!(catalog.len(), 1);
    let product = &catalog.products()[0];
    assert_eq!(product.id.value(), 1);
    assert_eq!(product.title, "Walnut Shelf");
    assert_eq!(product.price, 250000.0);
    assert_eq!(app.status_message, "Product added");
}

#[test]
fn test_edit_flow_changes_only_target() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    let first = catalog.add(draft("Oak Table", 500000.0)).unwrap();
    let second = catalog.add(draft("Pine Chair", 150000.0)).unwrap();

    let mut app = App::new();
    app.open_edit_form(&mut catalog).unwrap();
    assert_eq!(app.mode, AppMode::Form);
    assert_eq!(catalog.selected(), Some(first));

    app.form.as_mut().unwrap().price = "999".to_string();
    app.submit_form(&mut catalog).unwrap();

    assert_eq!(app.status_message, "Product updated");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(first).unwrap().price, 999.0);
    assert_eq!(catalog.get(second).unwrap().price, 150000.0);
    assert!(catalog.selected().is_none());
}

#[test]
fn test_edit_form_prefills_current_values() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    catalog.add(draft("Oak Table", 500000.0)).unwrap();

    let mut app = App::new();
    app.open_edit_form(&mut catalog).unwrap();

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.title, "Oak Table");
    assert_eq!(form.price, "500000");
    assert_eq!(form.img, "https://example.com/img.png");
    assert_eq!(form.rate, "4");
    assert_eq!(form.description, "A catalog product");
}

#[test]
fn test_rejected_submit_keeps_form_open() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    let mut app = App::new();

    app.open_add_form(&mut catalog).unwrap();
    fill_form(&mut app, "Walnut Shelf", "0");
    app.submit_form(&mut catalog).unwrap();

    assert_eq!(app.mode, AppMode::Form);
    assert!(catalog.is_empty());
    assert_eq!(app.status_message, "Fix the highlighted fields");
    let form = app.form.as_ref().unwrap();
    assert!(form.error_for(FormField::Price).is_some());
    assert!(form.error_for(FormField::Title).is_none());
}

#[test]
fn test_add_form_ignores_previous_selection() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    let first = catalog.add(draft("Oak Table", 500000.0)).unwrap();
    catalog.select_for_edit(Some(first)).unwrap();

    let mut app = App::new();
    app.open_add_form(&mut catalog).unwrap();
    fill_form(&mut app, "Pine Chair", "150000");
    app.submit_form(&mut catalog).unwrap();

    // The stale selection must not turn the add into an update.
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(first).unwrap().title, "Oak Table");
}

#[test]
fn test_cancel_form_clears_selection() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    catalog.add(draft("Oak Table", 500000.0)).unwrap();

    let mut app = App::new();
    app.open_edit_form(&mut catalog).unwrap();
    assert!(catalog.selected().is_some());

    app.cancel_form(&mut catalog).unwrap();

    assert!(catalog.selected().is_none());
    assert!(app.form.is_none());
    assert_eq!(app.mode, AppMode::Browse);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_delete_confirmation_flow() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    let first = catalog.add(draft("Oak Table", 500000.0)).unwrap();
    catalog.add(draft("Pine Chair", 150000.0)).unwrap();

    let mut app = App::new();
    app.request_delete(&catalog);
    assert_eq!(app.mode, AppMode::ConfirmDelete);
    assert_eq!(app.pending_delete, Some(first));

    app.confirm_delete(&mut catalog).unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(first).is_none());
    assert_eq!(app.mode, AppMode::Browse);
    assert_eq!(app.status_message, "Product deleted");
}

#[test]
fn test_cancel_delete_keeps_product() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    catalog.add(draft("Oak Table", 500000.0)).unwrap();

    let mut app = App::new();
    app.request_delete(&catalog);
    app.cancel_delete();

    assert_eq!(catalog.len(), 1);
    assert!(app.pending_delete.is_none());
    assert_eq!(app.mode, AppMode::Browse);
}

#[test]
fn test_search_narrows_listing_and_clamps_cursor() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open_catalog(&dir);
    catalog.add(draft("red shoe", 100.0)).unwrap();
    catalog.add(draft("blue shoe", 200.0)).unwrap();
    catalog.add(draft("hat", 300.0)).unwrap();

    let mut app = App::new();
    app.cursor = 2;

    app.search_query = "shoe".to_string();
    app.clamp_cursor(app.visible_products(&catalog).len());

    let visible = app.visible_products(&catalog);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "red shoe");
    assert_eq!(visible[1].title, "blue shoe");
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_form_field_navigation_wraps() {
    let mut form = FormBuffer::empty();
    assert_eq!(form.focused_field, FormField::Title);

    form.previous_field();
    assert_eq!(form.focused_field, FormField::Description);

    form.next_field();
    assert_eq!(form.focused_field, FormField::Title);
}

#[test]
fn test_reference_panel_settles_empty_on_failure() {
    let mut app = App::new();
    assert!(app.reference.loading);

    app.reference.settle(None);

    assert!(!app.reference.loading);
    assert!(app.reference.data.is_none());
}
