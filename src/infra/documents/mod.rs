pub mod charts;
pub mod csv_export;
pub mod qr;
pub mod ticket_pdf;
