#[cfg(test)]
mod tests {
    use crate::core::models::ThemeMode;
    use crate::presentation::app_theme::*;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    fn background_of(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.043, 0.047, 0.071));
        assert_eq!(palette.text, Color::from_rgb(0.988, 0.906, 0.953));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_has_pink_background() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        assert_eq!(background_of(&style), Color::from_rgb(0.925, 0.282, 0.600));
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_disabled_is_gray() {
        let style = primary_button_style(&Theme::Dark, button::Status::Disabled);

        assert_eq!(background_of(&style), Color::from_rgb(0.3, 0.3, 0.3));
        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius() {
        let primary_active = primary_button_style(&Theme::Dark, button::Status::Active);
        let secondary_active = secondary_button_style(&Theme::Dark, button::Status::Active);

        assert_eq!(primary_active.border.radius, 12.0.into());
        assert_eq!(secondary_active.border.radius, 12.0.into());
    }

    #[test]
    fn test_drop_zone_border_dims_while_locked() {
        let open = drop_zone_style(false);
        let locked = drop_zone_style(true);

        assert!(locked.border.color.a < open.border.color.a);
    }
}
