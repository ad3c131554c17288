//! Indicator geometry.

/// A bounding box in viewport pixels, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Where the indicator sits inside the nav.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Offset from the nav's left edge, scroll included.
    pub left: f64,
    pub width: f64,
}

impl Placement {
    /// Align with `link`, measured against `nav` scrolled by `scroll_left`.
    pub fn under(nav: Rect, link: Rect, scroll_left: f64) -> Self {
        Self {
            left: link.left - nav.left + scroll_left,
            width: link.width,
        }
    }

    /// CSS `left` value.
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    /// CSS `width` value.
    pub fn width_px(&self) -> String {
        format!("{}px", self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_nav() {
        let nav = Rect::new(100.0, 10.0, 600.0, 40.0);
        let link = Rect::new(250.0, 15.0, 80.0, 30.0);
        let placement = Placement::under(nav, link, 0.0);
        assert_eq!(placement.left, 150.0);
        assert_eq!(placement.width, 80.0);
    }

    #[test]
    fn test_scroll_offset_added() {
        let nav = Rect::new(0.0, 0.0, 320.0, 40.0);
        // Link scrolled partly out of view to the left.
        let link = Rect::new(-30.0, 0.0, 90.0, 30.0);
        let placement = Placement::under(nav, link, 120.0);
        assert_eq!(placement.left, 90.0);
    }

    #[test]
    fn test_css_values() {
        let placement = Placement {
            left: 12.5,
            width: 64.0,
        };
        assert_eq!(placement.left_px(), "12.5px");
        assert_eq!(placement.width_px(), "64px");
    }
}
