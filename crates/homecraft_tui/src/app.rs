//! Application state and core TUI types.

use homecraft_core::{FieldViolation, FormField, Product, ProductDraft, ProductId, validate_draft};
use homecraft_error::HomecraftResult;
use homecraft_pokeapi::ReferenceData;
use homecraft_store::Catalog;
use strum::IntoEnumIterator;

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Browse view - navigate the product listing
    Browse,
    /// Search view - keystrokes edit the filter query
    Search,
    /// Form view - add or edit a product
    Form,
    /// Confirm view - confirm a pending delete
    ConfirmDelete,
}

/// Text buffers for the product form.
///
/// Every field is edited as text; parsing and validation happen on submit,
/// and failures land in `errors` without touching the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FormBuffer {
    /// Title being edited
    pub title: String,
    /// Price being edited
    pub price: String,
    /// Image URL being edited
    pub img: String,
    /// Rating being edited
    pub rate: String,
    /// Description being edited
    pub description: String,
    /// Which field is currently focused
    pub focused_field: FormField,
    /// Violations from the last rejected submit
    pub errors: Vec<FieldViolation>,
}

impl FormBuffer {
    /// Create an empty form for adding a product.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            img: String::new(),
            rate: String::new(),
            description: String::new(),
            focused_field: FormField::Title,
            errors: Vec::new(),
        }
    }

    /// Create a form pre-filled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            img: product.img.clone(),
            rate: product.rate.to_string(),
            description: product.description.clone(),
            focused_field: FormField::Title,
            errors: Vec::new(),
        }
    }

    /// The text buffer of the focused field.
    pub fn focused_buffer(&mut self) -> &mut String {
        match self.focused_field {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Img => &mut self.img,
            FormField::Rate => &mut self.rate,
            FormField::Description => &mut self.description,
        }
    }

    /// Move focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let pos = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(pos + 1) % fields.len()];
    }

    /// Move focus to the previous field, wrapping around.
    pub fn previous_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let pos = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// The violation recorded for a field, if any.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.reason.as_str())
    }

    /// Parse and validate the buffers into a draft.
    ///
    /// Returns one violation per failing field; unparseable price or rating
    /// text counts as a violation on that field.
    pub fn to_draft(&self) -> Result<ProductDraft, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let price = self.price.trim().parse::<f64>().unwrap_or_else(|_| {
            violations.push(FieldViolation::new(
                FormField::Price,
                "Price must be a number greater than 0",
            ));
            f64::NAN
        });
        let rate = self.rate.trim().parse::<u8>().unwrap_or_else(|_| {
            violations.push(FieldViolation::new(
                FormField::Rate,
                "Rating must be a whole number from 1 to 5",
            ));
            0
        });

        let draft = ProductDraft::builder()
            .title(self.title.as_str())
            .price(price)
            .img(self.img.as_str())
            .rate(rate)
            .description(self.description.as_str())
            .build();

        for violation in validate_draft(&draft) {
            if !violations.iter().any(|v| v.field == violation.field) {
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            Ok(draft)
        } else {
            Err(violations)
        }
    }
}

/// State of the read-only reference panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePanel {
    /// Whether the startup fetch is still in flight
    pub loading: bool,
    /// Fetched data; stays `None` after a failed fetch
    pub data: Option<ReferenceData>,
}

impl ReferencePanel {
    /// Create a panel waiting on its startup fetch.
    pub fn new() -> Self {
        Self {
            loading: true,
            data: None,
        }
    }

    /// Record the fetch outcome.
    ///
    /// A failed fetch settles with `None` and is indistinguishable from an
    /// empty result from here on.
    pub fn settle(&mut self, data: Option<ReferenceData>) {
        self.loading = false;
        self.data = data;
    }
}

impl Default for ReferencePanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state.
///
/// The catalog itself lives outside the app; methods that read or mutate
/// products take it as an argument.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Live title filter over the listing
    pub search_query: String,
    /// Cursor position within the filtered listing
    pub cursor: usize,
    /// Form buffers (when in Form mode)
    pub form: Option<FormBuffer>,
    /// Product queued for deletion (when in ConfirmDelete mode)
    pub pending_delete: Option<ProductId>,
    /// Reference panel state
    pub reference: ReferencePanel,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance with empty state.
    pub fn new() -> Self {
        Self {
            mode: AppMode::Browse,
            search_query: String::new(),
            cursor: 0,
            form: None,
            pending_delete: None,
            reference: ReferencePanel::new(),
            status_message: String::from("Press a to add, / to search"),
            should_quit: false,
        }
    }

    /// Products matching the current search query, in catalog order.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.search(&self.search_query)
    }

    /// Id of the product under the cursor, if any.
    pub fn cursor_product_id(&self, catalog: &Catalog) -> Option<ProductId> {
        self.visible_products(catalog).get(self.cursor).map(|p| p.id)
    }

    /// Move the cursor up.
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down.
    pub fn select_next(&mut self, visible_len: usize) {
        if self.cursor < visible_len.saturating_sub(1) {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside the filtered listing.
    pub fn clamp_cursor(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.cursor = 0;
        } else if self.cursor >= visible_len {
            self.cursor = visible_len - 1;
        }
    }

    /// Open an empty form for adding a product.
    ///
    /// Clears the edit selection first, so submit takes the add path.
    pub fn open_add_form(&mut self, catalog: &mut Catalog) -> HomecraftResult<()> {
        catalog.select_for_edit(None)?;
        self.form = Some(FormBuffer::empty());
        self.mode = AppMode::Form;
        Ok(())
    }

    /// Select the product under the cursor and open the form pre-filled.
    pub fn open_edit_form(&mut self, catalog: &mut Catalog) -> HomecraftResult<()> {
        let Some(id) = self.cursor_product_id(catalog) else {
            return Ok(());
        };

        if catalog.select_for_edit(Some(id))?.is_some()
            && let Some(product) = catalog.selected_product()
        {
            self.form = Some(FormBuffer::from_product(product));
            self.mode = AppMode::Form;
        }
        Ok(())
    }

    /// Submit the form.
    ///
    /// Validation failures keep the form open with field-level messages and
    /// leave the catalog untouched. On success the form closes, the selection
    /// clears, and the product is added or updated depending on whether a
    /// selection was present.
    pub fn submit_form(&mut self, catalog: &mut Catalog) -> HomecraftResult<()> {
        let Some(form) = &mut self.form else {
            return Ok(());
        };

        match form.to_draft() {
            Err(violations) => {
                form.errors = violations;
                self.status_message = String::from("Fix the highlighted fields");
            }
            Ok(draft) => {
                match catalog.selected() {
                    Some(id) => {
                        catalog.update(draft.into_product(id))?;
                        self.status_message = String::from("Product updated");
                    }
                    None => {
                        catalog.add(draft)?;
                        self.status_message = String::from("Product added");
                    }
                }
                catalog.select_for_edit(None)?;
                self.form = None;
                self.mode = AppMode::Browse;
                self.clamp_cursor(self.visible_products(catalog).len());
            }
        }
        Ok(())
    }

    /// Close the form without submitting, clearing the selection.
    pub fn cancel_form(&mut self, catalog: &mut Catalog) -> HomecraftResult<()> {
        catalog.select_for_edit(None)?;
        self.form = None;
        self.mode = AppMode::Browse;
        Ok(())
    }

    /// Queue the product under the cursor for deletion.
    pub fn request_delete(&mut self, catalog: &Catalog) {
        if let Some(id) = self.cursor_product_id(catalog) {
            self.pending_delete = Some(id);
            self.mode = AppMode::ConfirmDelete;
        }
    }

    /// Delete the queued product.
    pub fn confirm_delete(&mut self, catalog: &mut Catalog) -> HomecraftResult<()> {
        if let Some(id) = self.pending_delete.take() {
            catalog.remove(id)?;
            self.status_message = String::from("Product deleted");
        }
        self.mode = AppMode::Browse;
        self.clamp_cursor(self.visible_products(catalog).len());
        Ok(())
    }

    /// Drop the queued deletion without touching the catalog.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = AppMode::Browse;
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
