use shoji_ipc::Region;

/// Short glyph shown briefly after a window lands in `region`.
pub fn label_for(region: Region) -> &'static str {
    match region {
        Region::Left => "←",
        Region::Right => "→",
        Region::Up => "↑",
        Region::Down => "↓",
        Region::TopLeft => "↖",
        Region::TopRight => "↗",
        Region::BottomLeft => "↙",
        Region::BottomRight => "↘",
        Region::Centre => "•",
        Region::Maximized => "⤢",
        _ => region.name(),
    }
}
