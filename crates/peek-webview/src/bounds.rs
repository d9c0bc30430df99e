//! Coordinate conversion between QuickPeek geometry and wry rects.

use peek_common::{ContentSize, WindowBounds};

/// Convert integer view bounds (logical pixels) to a wry `Rect`.
pub fn to_wry_rect(bounds: WindowBounds) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            bounds.x as f64,
            bounds.y as f64,
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            bounds.width as f64,
            bounds.height as f64,
        )),
    }
}

/// A rect covering the whole content area. Zero sizes pass through; wry
/// accepts them for hidden views.
pub fn full_rect(size: ContentSize) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            size.width as f64,
            size.height as f64,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_convert_to_wry_rect() {
        let rect = to_wry_rect(WindowBounds::new(100, 50, 800, 600).unwrap());

        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn full_rect_is_anchored_at_origin() {
        let rect = full_rect(ContentSize::new(1000, 750));
        match (rect.position, rect.size) {
            (wry::dpi::Position::Logical(pos), wry::dpi::Size::Logical(size)) => {
                assert_eq!((pos.x, pos.y), (0.0, 0.0));
                assert_eq!((size.width, size.height), (1000.0, 750.0));
            }
            _ => panic!("Expected logical rect"),
        }
    }
}
