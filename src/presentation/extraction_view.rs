use iced::widget::{button, column, container, image, progress_bar, row, scrollable, text, Space};
use iced::{Alignment, Background, Color, Element, Length};

use crate::core::models::ThemeMode;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;
use crate::presentation::app_theme;

pub fn render(orchestrator: &AppOrchestrator) -> Element<'_, OrchestratorMessage> {
    let theme = app_theme::get_theme(&orchestrator.settings().theme_mode);
    let workflow = orchestrator.workflow();
    let locked = workflow.is_recognizing();

    let title = text(format!("🪄 {}", global_constants::APPLICATION_TITLE)).size(40);

    let theme_label = match orchestrator.settings().theme_mode {
        ThemeMode::Dark => "☀ Light",
        ThemeMode::Light => "🌙 Dark",
    };
    let theme_toggle = button(text(theme_label).size(13))
        .padding([6, 14])
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press(OrchestratorMessage::ToggleTheme);

    let header = row![title, Space::new().width(Length::Fill), theme_toggle]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let content = column![
        header,
        render_drop_zone(locked),
        render_preview_and_result(orchestrator),
        render_progress(orchestrator),
        render_actions(orchestrator),
        render_status(orchestrator.status()),
    ]
    .spacing(24)
    .padding(32)
    .align_x(Alignment::Center);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| {
            let palette = theme.palette();
            iced::widget::container::Style {
                background: Some(Background::Color(palette.background)),
                text_color: Some(palette.text),
                ..Default::default()
            }
        })
        .into()
}

fn render_drop_zone(locked: bool) -> Element<'static, OrchestratorMessage> {
    let prompt = column![
        text("Drag & Drop").size(18),
        text("or click to select an image file")
            .size(14)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.7, 0.7, 0.7, 1.0)),
            }),
        text("↓").size(24),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let picker = button(prompt)
        .padding([32, 48])
        .width(Length::Fill)
        .style(|_theme, _status| iced::widget::button::Style {
            background: None,
            text_color: Color::from_rgb(0.988, 0.906, 0.953),
            ..Default::default()
        })
        .on_press_maybe((!locked).then_some(OrchestratorMessage::PickImage));

    container(picker)
        .width(Length::Fixed(640.0))
        .style(move |_theme| app_theme::drop_zone_style(locked))
        .into()
}

fn render_preview_and_result(orchestrator: &AppOrchestrator) -> Element<'_, OrchestratorMessage> {
    let mut panels = row![].spacing(32).align_y(Alignment::Start);

    if let (Some(handle), Some(selected)) = (orchestrator.preview(), orchestrator.workflow().image())
    {
        let preview_panel = column![
            text(selected.file_name.as_str()).size(14),
            container(image(handle.clone()).width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(8)
                .style(app_theme::result_panel_style),
        ]
        .spacing(12)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(480.0));

        panels = panels.push(preview_panel);
    }

    if let Some(result) = orchestrator.workflow().result() {
        let download_btn = button(text("Download Text").size(13))
            .padding([8, 16])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press(OrchestratorMessage::DownloadText);

        let result_panel = column![
            row![
                text("📝 Extracted Text").size(20),
                Space::new().width(Length::Fill),
                download_btn,
            ]
            .align_y(Alignment::Center),
            container(scrollable(text(result.as_str()).size(15).font(iced::Font::MONOSPACE)))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(16)
                .style(app_theme::result_panel_style),
        ]
        .spacing(12)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(480.0));

        panels = panels.push(result_panel);
    }

    panels.width(Length::Fill).into()
}

fn render_progress(orchestrator: &AppOrchestrator) -> Element<'_, OrchestratorMessage> {
    let workflow = orchestrator.workflow();
    if !workflow.is_recognizing() {
        return Space::new().height(Length::Fixed(0.0)).into();
    }

    let percent = workflow.progress().percent();

    column![
        progress_bar(0.0..=100.0, f32::from(percent)),
        text(workflow.progress().to_string()).size(12),
    ]
    .spacing(4)
    .width(Length::Fixed(320.0))
    .align_x(Alignment::End)
    .into()
}

fn render_actions(orchestrator: &AppOrchestrator) -> Element<'_, OrchestratorMessage> {
    let workflow = orchestrator.workflow();

    let label = if workflow.is_recognizing() {
        global_constants::STATUS_EXTRACTING
    } else {
        "Extract Text"
    };

    let extract_btn = button(
        container(text(label).size(18))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .padding([14, 24])
    .width(Length::Fixed(320.0))
    .style(|theme, status| app_theme::primary_button_style(theme, status))
    .on_press_maybe(workflow.can_extract().then_some(OrchestratorMessage::ExtractText));

    let clear_btn = button(text("Clear").size(14))
        .padding([14, 20])
        .style(|theme, status| app_theme::secondary_button_style(theme, status))
        .on_press_maybe(workflow.can_extract().then_some(OrchestratorMessage::Reset));

    row![extract_btn, clear_btn]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

fn render_status(status: &str) -> Element<'_, OrchestratorMessage> {
    text(status)
        .size(13)
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
        })
        .into()
}
