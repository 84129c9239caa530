use ratatui::style::Color;

const STUDIO_PALETTE: [Color; 8] = [
    Color::Red,
    Color::Yellow,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::LightYellow,
];

/// Stable accent colour for a studio, the same name always gets the same colour
pub fn color_for_studio(studio: &str) -> Color {
    let hash = studio
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    STUDIO_PALETTE[hash as usize % STUDIO_PALETTE.len()]
}

/// Release year is highlighted in blue
pub fn color_for_year() -> Color {
    Color::LightBlue
}

pub fn card_background(selected: bool, focused: bool) -> Color {
    match (selected, focused) {
        (true, true) => Color::Rgb(60, 60, 80),
        (true, false) => Color::Rgb(40, 40, 50),
        _ => Color::Reset,
    }
}

pub fn border_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_colour_is_stable() {
        assert_eq!(color_for_studio("Nintendo"), color_for_studio("Nintendo"));
    }
}
