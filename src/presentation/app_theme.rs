use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::core::models::ThemeMode;

const ACCENT_PINK: Color = Color::from_rgb(0.925, 0.282, 0.600);
const ACCENT_PINK_HOVER: Color = Color::from_rgb(0.957, 0.447, 0.714);
const ACCENT_INDIGO: Color = Color::from_rgb(0.388, 0.400, 0.945);
const DISABLED_BACKGROUND: Color = Color::from_rgb(0.3, 0.3, 0.3);
const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.043, 0.047, 0.071),
                text: Color::from_rgb(0.988, 0.906, 0.953),
                primary: ACCENT_PINK,
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: ACCENT_INDIGO,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow::default(),
        ..button::Style::default()
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(ACCENT_PINK, Color::WHITE, ACCENT_PINK),
        button::Status::Hovered => filled_button(ACCENT_PINK_HOVER, Color::WHITE, ACCENT_INDIGO),
        button::Status::Pressed => filled_button(ACCENT_INDIGO, Color::WHITE, ACCENT_INDIGO),
        button::Status::Disabled => {
            filled_button(DISABLED_BACKGROUND, DISABLED_TEXT, Color::from_rgb(0.4, 0.4, 0.4))
        }
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.4, 0.4, 0.4),
        ),
        button::Status::Hovered => filled_button(
            Color::from_rgb(0.32, 0.32, 0.32),
            Color::WHITE,
            Color::from_rgb(0.5, 0.5, 0.5),
        ),
        button::Status::Pressed => filled_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::WHITE,
            Color::from_rgb(0.4, 0.4, 0.4),
        ),
        button::Status::Disabled => filled_button(
            DISABLED_BACKGROUND,
            DISABLED_TEXT,
            Color::from_rgb(0.35, 0.35, 0.35),
        ),
    }
}

/// The dashed-looking drop target; dimmed while recognition locks input.
pub fn drop_zone_style(locked: bool) -> container::Style {
    let border_color = if locked {
        Color::from_rgba(0.925, 0.282, 0.600, 0.25)
    } else {
        Color::from_rgba(0.925, 0.282, 0.600, 0.6)
    };

    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.06))),
        border: Border {
            color: border_color,
            width: 3.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.925, 0.282, 0.600, 0.15),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

pub fn result_panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
        border: Border {
            color: Color::from_rgba(0.925, 0.282, 0.600, 0.7),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}
