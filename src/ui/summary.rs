// SPDX-License-Identifier: MPL-2.0
//! Analysis summary panel: severity badge, analysis date, detected type
//! counts, clinician notes, and the severity trend line.

use crate::domain::{AcneAnalysis, SeverityTrend};
use crate::ui::theme;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

/// Renders the summary card body for an analysis.
///
/// Emits no messages of its own, so the message type is generic.
pub fn view<'a, Message: 'a>(
    analysis: &'a AcneAnalysis,
    trend: SeverityTrend,
    history_len: usize,
) -> Element<'a, Message> {
    let severity = analysis.severity;
    let header = Row::new()
        .spacing(10)
        .align_y(iced::alignment::Vertical::Center)
        .push(text("Acne Analysis Results").size(18))
        .push(
            container(text(severity.label()).size(13))
                .padding([2, 10])
                .style(theme::badge_style(theme::severity_color(severity))),
        );

    let date_line = text(format!(
        "Analyzed on {}",
        analysis.date.format("%B %e, %Y %H:%M")
    ))
    .size(13)
    .color(theme::muted_text_color());

    let mut type_chips = Row::new().spacing(6);
    for (kind, count) in analysis.region_type_counts() {
        type_chips = type_chips.push(
            container(text(format!("{} ({})", kind, count)).size(12))
                .padding([2, 8])
                .style(theme::badge_style(theme::muted_text_color())),
        );
    }

    let mut column = Column::new()
        .spacing(8)
        .push(header)
        .push(date_line)
        .push(type_chips);

    if let Some(notes) = &analysis.notes {
        column = column.push(
            Column::new()
                .spacing(2)
                .push(text("Doctor's Notes").size(13))
                .push(text(notes.as_str()).size(13).color(theme::muted_text_color())),
        );
    }

    let trend_line = Row::new()
        .spacing(6)
        .push(text("Severity trend:").size(13))
        .push(
            text(trend.label())
                .size(13)
                .color(theme::trend_color(trend)),
        )
        .push(
            text(format!(
                "({} {})",
                history_len,
                if history_len == 1 { "analysis" } else { "analyses" }
            ))
            .size(13)
            .color(theme::muted_text_color()),
        );
    column = column.push(trend_line);

    container(column).width(Length::Fill).padding(12).into()
}
