use super::Rect;
use shoji_ipc::ScreenDirection;

pub type DisplayId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    pub id: DisplayId,
    /// Full bounds in global top-left coordinates.
    pub frame: Rect,
    /// Bounds minus menu bar and dock, same coordinate space as `frame`.
    pub visible_frame: Rect,
}

impl Display {
    pub fn new(id: DisplayId, frame: Rect, visible_frame: Rect) -> Self {
        Self {
            id,
            frame,
            visible_frame,
        }
    }
}

/// Display a window with `frame` belongs to: the one holding its centre,
/// else the one it overlaps most, else the first one.
pub fn display_for_frame<'a>(displays: &'a [Display], frame: &Rect) -> Option<&'a Display> {
    let (cx, cy) = frame.center();
    if let Some(display) = displays.iter().find(|d| d.frame.contains_point(cx, cy)) {
        return Some(display);
    }

    displays
        .iter()
        .map(|d| (d, d.frame.intersection_area(frame)))
        .filter(|(_, area)| *area > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(d, _)| d)
        .or_else(|| displays.first())
}

/// Display after (or before) `current` in host order, wrapping around.
/// `None` when there is no display other than `current`.
pub fn neighbour_display(
    displays: &[Display],
    current: DisplayId,
    direction: ScreenDirection,
) -> Option<&Display> {
    if displays.len() < 2 {
        return None;
    }

    let index = displays.iter().position(|d| d.id == current)?;
    let len = displays.len();
    let next = match direction {
        ScreenDirection::Next => (index + 1) % len,
        ScreenDirection::Prev => (index + len - 1) % len,
    };

    let display = &displays[next];
    (display.id != current).then_some(display)
}
