use shoji_ipc::Region;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Area shared with `other`, zero when the rectangles do not overlap.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let h = (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }

    /// Frame of `region` inside this rectangle.
    ///
    /// Offsets are rounded, added to the unrounded origin and rounded again, so
    /// fractional host coordinates always produce an integral target frame.
    /// Width and height are rounded independently.
    pub fn sub_frame(&self, region: Region) -> Rect {
        let half = (self.width / 2.0).round();
        let half_height = (self.height / 2.0).round();
        let third = (self.width / 3.0).round();
        let two_thirds = (third * 2.0).round();
        let width = self.width.round();
        let height = self.height.round();

        let (dx, dy, w, h) = match region {
            Region::Left => (0.0, 0.0, half, height),
            Region::Right => (half, 0.0, half, height),
            Region::Up => (0.0, 0.0, width, half_height),
            Region::Down => (0.0, half_height, width, half_height),
            Region::TopLeft => (0.0, 0.0, half, half_height),
            Region::TopRight => (half, 0.0, half, half_height),
            Region::BottomLeft => (0.0, half_height, half, half_height),
            Region::BottomRight => (half, half_height, half, half_height),
            Region::Centre => (half / 2.0, half_height / 2.0, half, half_height),
            Region::LeftThird => (0.0, 0.0, third, height),
            Region::CentreThird => (third, 0.0, third, height),
            Region::RightThird => (two_thirds, 0.0, third, height),
            Region::Left2Thirds => (0.0, 0.0, two_thirds, height),
            Region::Right2Thirds => (third, 0.0, two_thirds, height),
            Region::TopLeftSix => (0.0, 0.0, third, half_height),
            Region::TopCentreSix => (third, 0.0, third, half_height),
            Region::TopRightSix => (two_thirds, 0.0, third, half_height),
            Region::BotLeftSix => (0.0, half_height, third, half_height),
            Region::BotCentreSix => (third, half_height, third, half_height),
            Region::BotRightSix => (two_thirds, half_height, third, half_height),
            Region::Maximized => (0.0, 0.0, width, height),
        };

        Rect {
            x: (self.x + dx.round()).round(),
            y: (self.y + dy.round()).round(),
            width: w,
            height: h,
        }
    }

    /// Maps this frame from `from` into `to`, keeping its relative position and size.
    pub fn translate_between(&self, from: &Rect, to: &Rect) -> Rect {
        let scale_x = if from.width > 0.0 {
            to.width / from.width
        } else {
            1.0
        };
        let scale_y = if from.height > 0.0 {
            to.height / from.height
        } else {
            1.0
        };

        let width = (self.width * scale_x).min(to.width).round();
        let height = (self.height * scale_y).min(to.height).round();
        let x = (to.x + (self.x - from.x) * scale_x)
            .min(to.x + to.width - width)
            .max(to.x);
        let y = (to.y + (self.y - from.y) * scale_y)
            .min(to.y + to.height - height)
            .max(to.y);

        Rect {
            x: x.round(),
            y: y.round(),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1920.0,
        height: 1080.0,
    };

    fn assert_rect(rect: Rect, x: f64, y: f64, width: f64, height: f64) {
        assert_eq!(rect, Rect::new(x, y, width, height), "got {:?}", rect);
    }

    #[test]
    fn test_halves() {
        assert_rect(FULL_HD.sub_frame(Region::Left), 0.0, 0.0, 960.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::Right), 960.0, 0.0, 960.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::Up), 0.0, 0.0, 1920.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::Down), 0.0, 540.0, 1920.0, 540.0);
    }

    #[test]
    fn test_quarters_and_centre() {
        assert_rect(FULL_HD.sub_frame(Region::TopLeft), 0.0, 0.0, 960.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::TopRight), 960.0, 0.0, 960.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::BottomLeft), 0.0, 540.0, 960.0, 540.0);
        assert_rect(
            FULL_HD.sub_frame(Region::BottomRight),
            960.0,
            540.0,
            960.0,
            540.0,
        );
        assert_rect(FULL_HD.sub_frame(Region::Centre), 480.0, 270.0, 960.0, 540.0);
    }

    #[test]
    fn test_thirds() {
        assert_rect(FULL_HD.sub_frame(Region::LeftThird), 0.0, 0.0, 640.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::CentreThird), 640.0, 0.0, 640.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::RightThird), 1280.0, 0.0, 640.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::Left2Thirds), 0.0, 0.0, 1280.0, 1080.0);
        assert_rect(FULL_HD.sub_frame(Region::Right2Thirds), 640.0, 0.0, 1280.0, 1080.0);
    }

    #[test]
    fn test_sixths() {
        assert_rect(FULL_HD.sub_frame(Region::TopLeftSix), 0.0, 0.0, 640.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::TopCentreSix), 640.0, 0.0, 640.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::TopRightSix), 1280.0, 0.0, 640.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::BotLeftSix), 0.0, 540.0, 640.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::BotCentreSix), 640.0, 540.0, 640.0, 540.0);
        assert_rect(FULL_HD.sub_frame(Region::BotRightSix), 1280.0, 540.0, 640.0, 540.0);
    }

    #[test]
    fn test_maximized_is_whole_parent() {
        assert_eq!(FULL_HD.sub_frame(Region::Maximized), FULL_HD);
    }

    #[test]
    fn test_offset_origin_and_fractional_values() {
        // Secondary display to the left of the main one, below a 25pt menu bar.
        let parent = Rect::new(-1440.0, 25.5, 1440.0, 874.5);
        let right = parent.sub_frame(Region::Right);
        assert_rect(right, -720.0, 26.0, 720.0, 875.0);

        let bottom = parent.sub_frame(Region::Down);
        // halfHeight = round(437.25) = 437, y = round(25.5 + 437) = 463
        assert_rect(bottom, -1440.0, 463.0, 1440.0, 437.0);
    }

    #[test]
    fn test_subframes_stay_inside_integral_parent() {
        let parents = [
            FULL_HD,
            Rect::new(0.0, 0.0, 1001.0, 777.0),
            Rect::new(100.0, 50.0, 1439.0, 899.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        ];

        for parent in parents {
            for region in Region::ALL {
                let child = parent.sub_frame(region);
                assert!(child.width >= 0.0 && child.height >= 0.0);
                assert!(child.x >= parent.x, "{:?} {:?}", region, child);
                assert!(child.y >= parent.y, "{:?} {:?}", region, child);
                assert!(
                    child.x + child.width <= parent.x + parent.width + 1.0,
                    "{:?} {:?}",
                    region,
                    child
                );
                assert!(
                    child.y + child.height <= parent.y + parent.height + 1.0,
                    "{:?} {:?}",
                    region,
                    child
                );
            }
        }
    }

    #[test]
    fn test_subframes_near_fractional_parent() {
        let parent = Rect::new(12.25, 7.75, 333.5, 222.25);

        for region in Region::ALL {
            let child = parent.sub_frame(region);
            // Origins snap to the nearest integer, so half a unit either way.
            assert!(child.x - parent.x >= -0.5, "{:?} {:?}", region, child);
            assert!(child.y - parent.y >= -0.5, "{:?} {:?}", region, child);
            assert!(
                child.x + child.width <= parent.x + parent.width + 1.5,
                "{:?} {:?}",
                region,
                child
            );
            assert!(
                child.y + child.height <= parent.y + parent.height + 1.5,
                "{:?} {:?}",
                region,
                child
            );
        }
    }

    #[test]
    fn test_complementary_regions_tile_parent() {
        for width in [1920.0, 1001.0, 1000.0, 1439.0, 7.0] {
            for height in [1080.0, 899.0, 3.0] {
                let parent = Rect::new(0.0, 0.0, width, height);
                let w = |r: Region| parent.sub_frame(r).width;
                let h = |r: Region| parent.sub_frame(r).height;

                assert!((w(Region::Left) + w(Region::Right) - width).abs() <= 1.0);
                assert!((h(Region::Up) + h(Region::Down) - height).abs() <= 1.0);
                assert!(
                    (w(Region::LeftThird) + w(Region::CentreThird) + w(Region::RightThird)
                        - width)
                        .abs()
                        <= 1.0
                );
                assert!(
                    (w(Region::TopLeftSix) + w(Region::TopCentreSix) + w(Region::TopRightSix)
                        - width)
                        .abs()
                        <= 1.0
                );
                assert!(
                    (w(Region::BotLeftSix) + w(Region::BotCentreSix) + w(Region::BotRightSix)
                        - width)
                        .abs()
                        <= 1.0
                );
            }
        }
    }

    #[test]
    fn test_translate_between_displays_keeps_proportions() {
        let from = Rect::new(0.0, 25.0, 1920.0, 1055.0);
        let to = Rect::new(1920.0, 0.0, 960.0, 1080.0);
        let window = Rect::new(0.0, 25.0, 960.0, 1055.0);

        let moved = window.translate_between(&from, &to);
        assert_rect(moved, 1920.0, 0.0, 480.0, 1080.0);
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(a.intersection_area(&Rect::new(50.0, 50.0, 100.0, 100.0)), 2500.0);
        assert_eq!(a.intersection_area(&Rect::new(100.0, 0.0, 10.0, 10.0)), 0.0);
    }
}
