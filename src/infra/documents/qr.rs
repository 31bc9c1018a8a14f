use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

use crate::error::AppError;

/// Pixels per QR module.
pub const BOX_SIZE: u32 = 10;
/// Quiet zone width in modules.
pub const BORDER: u32 = 5;

/// Encodes `data` as a black-on-white PNG QR code (error correction M).
pub fn encode_png(data: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(|e| AppError::Validation(format!("Cannot encode QR payload: {}", e)))?;

    let modules = code.width() as u32;
    let colors = code.to_colors();
    let size = (modules + 2 * BORDER) * BOX_SIZE;

    let img: GrayImage = ImageBuffer::from_fn(size, size, |x, y| {
        let module_x = (x / BOX_SIZE).checked_sub(BORDER);
        let module_y = (y / BOX_SIZE).checked_sub(BORDER);
        match (module_x, module_y) {
            (Some(mx), Some(my))
                if mx < modules && my < modules && colors[(my * modules + mx) as usize] == Color::Dark =>
            {
                Luma([0u8])
            }
            _ => Luma([255u8]),
        }
    });

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::InternalWithMsg(format!("QR PNG encoding failed: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png: &[u8]) -> String {
        let img = image::load_from_memory(png).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code");
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_ticket_payload_round_trip() {
        let png = encode_png("Ticket ID: 4821-Ada").unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode(&png), "Ticket ID: 4821-Ada");
    }

    #[test]
    fn test_json_payload_round_trip() {
        let payload = r#"{"ticket_id":"a1b2c3d4","event":"Data Conference"}"#;
        assert_eq!(decode(&encode_png(payload).unwrap()), payload);
    }

    #[test]
    fn test_image_geometry() {
        let png = encode_png("x").unwrap();
        let img = image::load_from_memory(&png).unwrap().to_luma8();
        // Version 1 is 21 modules wide.
        assert_eq!(img.width(), (21 + 2 * BORDER) * BOX_SIZE);
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(BORDER * BOX_SIZE, BORDER * BOX_SIZE).0[0], 0);
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let payload = "x".repeat(5000);
        assert!(matches!(encode_png(&payload), Err(AppError::Validation(_))));
    }
}
