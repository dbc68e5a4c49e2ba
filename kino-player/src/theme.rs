//! Kino's near-monochrome look: charcoal surfaces, silver text.

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

use crate::state::State;

pub const BACKGROUND: Color = Color {
    r: 0.067,
    g: 0.067,
    b: 0.067,
    a: 1.0,
};

pub const SURFACE: Color = Color {
    r: 0.118,
    g: 0.118,
    b: 0.118,
    a: 1.0,
};

pub const SURFACE_RAISED: Color = Color {
    r: 0.165,
    g: 0.165,
    b: 0.165,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.675,
    g: 0.675,
    b: 0.675,
    a: 1.0,
};

pub const TEXT_BRIGHT: Color = Color {
    r: 0.92,
    g: 0.92,
    b: 0.92,
    a: 1.0,
};

pub const TEXT_DIMMED: Color = Color {
    r: 0.45,
    g: 0.45,
    b: 0.45,
    a: 1.0,
};

pub const DANGER: Color = Color {
    r: 0.78,
    g: 0.31,
    b: 0.31,
    a: 1.0,
};

pub const SUCCESS: Color = Color {
    r: 0.42,
    g: 0.68,
    b: 0.44,
    a: 1.0,
};

const OVERLAY_SCRIM: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.75,
};

pub fn application(_state: &State) -> Theme {
    Theme::custom(
        "Kino".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT_PRIMARY,
            primary: TEXT_BRIGHT,
            success: SUCCESS,
            danger: DANGER,
        },
    )
}

pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn genre_tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_RAISED)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Scrim behind modals and the gallery overlay.
pub fn overlay_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(OVERLAY_SCRIM)),
        ..container::Style::default()
    }
}

pub fn pill_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_RAISED,
        _ => SURFACE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_BRIGHT,
        border: Border {
            radius: 24.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Borderless text-like button (nav items, links, card taps).
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => TEXT_BRIGHT,
            _ => TEXT_PRIMARY,
        },
        ..button::Style::default()
    }
}

pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: if active {
            TEXT_BRIGHT
        } else {
            match status {
                button::Status::Hovered => TEXT_PRIMARY,
                _ => TEXT_DIMMED,
            }
        },
        ..button::Style::default()
    }
}

pub fn underline_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => TEXT_PRIMARY,
        _ => TEXT_DIMMED,
    };
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: TEXT_DIMMED,
        placeholder: TEXT_DIMMED,
        value: TEXT_PRIMARY,
        selection: SURFACE_RAISED,
    }
}
