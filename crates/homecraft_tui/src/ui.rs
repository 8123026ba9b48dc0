//! UI rendering for TUI.

use crate::app::{App, AppMode};
use homecraft_core::{FormField, format_price, preview, stars};
use homecraft_store::Catalog;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App, catalog: &Catalog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Draw header
    draw_header(f, chunks[0]);

    // Draw main content based on mode
    match app.mode {
        AppMode::Browse | AppMode::Search => draw_catalog_view(f, app, catalog, chunks[1]),
        AppMode::Form => draw_form_view(f, app, catalog, chunks[1]),
        AppMode::ConfirmDelete => draw_confirm_view(f, app, catalog, chunks[1]),
    }

    // Draw status bar
    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let header = Paragraph::new("Homecraft Catalog")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let help_text = match app.mode {
        AppMode::Browse => "↑↓: Navigate | A: Add | E/Enter: Edit | D: Delete | /: Search | Q: Quit",
        AppMode::Search => "Type to filter | Esc/Enter: Done",
        AppMode::Form => "Tab: Next field | Enter: Save | Esc: Cancel",
        AppMode::ConfirmDelete => "Y: Delete | N: Cancel",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the product listing alongside the reference panel.
#[tracing::instrument(skip_all)]
fn draw_catalog_view(f: &mut Frame, app: &App, catalog: &Catalog, area: ratatui::layout::Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(panels[0]);

    draw_search_bar(f, app, left[0]);
    draw_product_table(f, app, catalog, left[1]);
    draw_reference_panel(f, app, panels[1]);
}

/// Draw the title filter input.
#[tracing::instrument(skip_all)]
fn draw_search_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let border_style = if app.mode == AppMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(app.search_query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

/// Draw the filtered product table.
#[tracing::instrument(skip_all)]
fn draw_product_table(f: &mut Frame, app: &App, catalog: &Catalog, area: ratatui::layout::Rect) {
    let visible = app.visible_products(catalog);
    if visible.is_empty() {
        let message = if catalog.is_empty() {
            "Add a product to get started"
        } else {
            "No products match the search"
        };
        let empty = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Products"))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Title", "Price", "Rating", "Description"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let style = if i == app.cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                product.id.to_string(),
                product.title.clone(),
                format_price(product.price),
                stars(product.rate),
                preview(&product.description, 55),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Products"))
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(table, area);
}

/// Draw the read-only PokeAPI reference panel.
///
/// A settled panel with no data renders the same frames as an empty one.
#[tracing::instrument(skip_all)]
fn draw_reference_panel(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if app.reference.loading {
        let loading = Paragraph::new("Loading")
            .block(Block::default().borders(Borders::ALL).title("Pokedex"))
            .alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let (names, effects) = match &app.reference.data {
        Some(data) => {
            let names = data
                .pokemon()
                .results()
                .iter()
                .map(|r| r.name().as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let effects = data
                .ability()
                .effect_entries()
                .iter()
                .map(|e| e.effect().as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
            (names, effects)
        }
        None => (String::new(), String::new()),
    };

    let pokemon = Paragraph::new(names).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Pokemon"),
    );
    f.render_widget(pokemon, chunks[0]);

    let ability = Paragraph::new(effects)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Ability Effects"),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(ability, chunks[1]);
}

/// Draw the add/edit form.
#[tracing::instrument(skip_all)]
fn draw_form_view(f: &mut Frame, app: &App, catalog: &Catalog, area: ratatui::layout::Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let title = if catalog.selected().is_some() {
        "Edit Product"
    } else {
        "Add Product"
    };
    let outer = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    draw_form_field(f, form, FormField::Title, "Title", &form.title, chunks[0]);
    draw_form_field(f, form, FormField::Price, "Price", &form.price, chunks[1]);
    draw_form_field(f, form, FormField::Img, "Image URL", &form.img, chunks[2]);
    draw_form_field(f, form, FormField::Rate, "Rating (1-5)", &form.rate, chunks[3]);
    draw_form_field(
        f,
        form,
        FormField::Description,
        "Description",
        &form.description,
        chunks[4],
    );

    if !form.errors.is_empty() {
        let messages = form
            .errors
            .iter()
            .map(|v| v.reason.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let errors = Paragraph::new(messages)
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: true });
        f.render_widget(errors, chunks[5]);
    }
}

/// Draw a single bordered form field.
///
/// The focused field gets a yellow border; a field with a validation
/// message gets a red one.
fn draw_form_field(
    f: &mut Frame,
    form: &crate::app::FormBuffer,
    field: FormField,
    title: &str,
    value: &str,
    area: ratatui::layout::Rect,
) {
    let border_style = if form.focused_field == field {
        Style::default().fg(Color::Yellow)
    } else if form.error_for(field).is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );
    f.render_widget(widget, area);
}

/// Draw the delete confirmation prompt.
#[tracing::instrument(skip_all)]
fn draw_confirm_view(f: &mut Frame, app: &App, catalog: &Catalog, area: ratatui::layout::Rect) {
    let prompt = app
        .pending_delete
        .and_then(|id| catalog.get(id))
        .map(|product| format!("Delete \"{}\"? (y/n)", product.title))
        .unwrap_or_else(|| "Delete this product? (y/n)".to_string());

    let confirm = Paragraph::new(prompt)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete"),
        )
        .alignment(Alignment::Center);
    f.render_widget(confirm, area);
}
