use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::AppError;

const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const LEFT_MARGIN: Mm = Mm(25.0);

pub const TICKET_TITLE: &str = "Event Ticket";

pub fn ticket_filename(ticket_id: &str) -> String {
    format!("{}_ticket.pdf", ticket_id)
}

/// Title followed by the name, event and ticket id lines.
pub fn ticket_lines(name: &str, event_title: &str, ticket_id: &str) -> [String; 4] {
    [
        TICKET_TITLE.to_string(),
        format!("Name: {}", name),
        format!("Event: {}", event_title),
        format!("Ticket ID: {}", ticket_id),
    ]
}

/// Renders a single US-letter page ticket.
pub fn render_ticket_pdf(name: &str, event_title: &str, ticket_id: &str) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("{} {}", TICKET_TITLE, ticket_id),
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "Ticket",
    );
    let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let layer = doc.get_page(page).get_layer(layer);

    let [title, rest @ ..] = ticket_lines(name, event_title, ticket_id);
    layer.use_text(title, 24.0, LEFT_MARGIN, Mm(250.0), &title_font);
    for (i, line) in rest.into_iter().enumerate() {
        layer.use_text(line, 12.0, LEFT_MARGIN, Mm(235.0 - 8.0 * i as f32), &body_font);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::InternalWithMsg(format!("PDF generation failed: {}", e))
}
