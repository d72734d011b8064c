use crate::core::{Display, Rect};
use core_graphics::display::CGDisplay;
use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;
use objc2_foundation::NSRect;

/// Active displays with frames in global top-left coordinates.
///
/// CoreGraphics supplies ids and bounds; AppKit supplies the visible frame,
/// matched to a display by its full frame.
pub fn active_displays() -> Vec<Display> {
    let ids = match CGDisplay::active_displays() {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!("CGGetActiveDisplayList failed: {}", err);
            return Vec::new();
        }
    };

    let main_height = CGDisplay::main().bounds().size.height;
    let screens = screen_frames(main_height);

    ids.into_iter()
        .map(|id| {
            let bounds = CGDisplay::new(id).bounds();
            let frame = Rect::new(
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.width,
                bounds.size.height,
            );
            let visible_frame = screens
                .iter()
                .find(|(full, _)| same_frame(full, &frame))
                .map(|(_, visible)| *visible)
                .unwrap_or(frame);
            Display::new(id, frame, visible_frame)
        })
        .collect()
}

/// `(frame, visibleFrame)` of every NSScreen, flipped to top-left origin.
fn screen_frames(main_height: f64) -> Vec<(Rect, Rect)> {
    let Some(mtm) = MainThreadMarker::new() else {
        tracing::debug!("Not on the main thread, visible frames unavailable");
        return Vec::new();
    };

    NSScreen::screens(mtm)
        .to_vec()
        .into_iter()
        .map(|screen| {
            (
                flip(screen.frame(), main_height),
                flip(screen.visibleFrame(), main_height),
            )
        })
        .collect()
}

fn flip(rect: NSRect, main_height: f64) -> Rect {
    Rect::new(
        rect.origin.x,
        main_height - (rect.origin.y + rect.size.height),
        rect.size.width,
        rect.size.height,
    )
}

fn same_frame(a: &Rect, b: &Rect) -> bool {
    (a.x - b.x).abs() < 1.0
        && (a.y - b.y).abs() < 1.0
        && (a.width - b.width).abs() < 1.0
        && (a.height - b.height).abs() < 1.0
}
