// SPDX-License-Identifier: MPL-2.0
//! Contact section: contact details, social links, and the validated form
//! with its simulated submission flow.
//!
//! Submission is a small state machine: `Idle -> Pending` on a valid submit,
//! `Pending -> Success | Error` when the simulated send settles, and back to
//! `Idle` after the result banner has been shown for a few seconds. Every
//! submission bumps a generation counter so timers from an abandoned attempt
//! cannot touch a newer one.

pub mod validator;

pub use validator::{validate, Draft, Field, ValidationError};

use crate::content;
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// How long the simulated send takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);
/// How long the result banner stays up before returning to idle.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

/// Result of the (simulated) send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Section state.
#[derive(Debug, Default)]
pub struct State {
    pub draft: Draft,
    pub errors: Vec<ValidationError>,
    pub status: SubmitStatus,
    /// Bumped on each submission; stale async results are dropped.
    generation: u64,
}

impl State {
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<ValidationError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
    SubmissionFinished { generation: u64, outcome: Outcome },
    BannerExpired { generation: u64 },
}

/// Events propagated to the parent application, which owns the async timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A valid submission started; settle it after [`SUBMIT_DELAY`].
    SubmissionStarted { generation: u64 },
    /// The outcome banner went up; clear it after [`BANNER_DURATION`].
    OutcomeSettled { generation: u64 },
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            state.draft.set(field, value);
            // Editing a field clears its error immediately.
            state.errors.retain(|e| e.field() != field);
            Event::None
        }
        Message::Submit => {
            if state.status == SubmitStatus::Pending {
                return Event::None;
            }
            let errors = validate(&state.draft);
            if !errors.is_empty() {
                state.errors = errors;
                return Event::None;
            }
            state.errors.clear();
            // The form has no transport; a submitted draft is only logged.
            eprintln!("{}", submission_log_line(&state.draft));
            state.status = SubmitStatus::Pending;
            state.generation += 1;
            Event::SubmissionStarted {
                generation: state.generation,
            }
        }
        Message::SubmissionFinished {
            generation,
            outcome,
        } => {
            if generation != state.generation || state.status != SubmitStatus::Pending {
                return Event::None;
            }
            match outcome {
                Outcome::Success => {
                    state.status = SubmitStatus::Succeeded;
                    state.draft = Draft::default();
                }
                Outcome::Error => state.status = SubmitStatus::Failed,
            }
            Event::OutcomeSettled { generation }
        }
        Message::BannerExpired { generation } => {
            if generation == state.generation
                && matches!(
                    state.status,
                    SubmitStatus::Succeeded | SubmitStatus::Failed
                )
            {
                state.status = SubmitStatus::Idle;
            }
            Event::None
        }
    }
}

fn submission_log_line(draft: &Draft) -> String {
    format!(
        "Contact form submitted: name={:?} email={:?} subject={:?} message={:?}",
        draft.name, draft.email, draft.subject, draft.message
    )
}

/// Render the contact section.
pub fn view<'a>(state: &'a State, i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let heading = Column::new()
        .align_x(Alignment::Center)
        .spacing(spacing::XS)
        .push(
            text(i18n.tr("contact-title"))
                .size(typography::TITLE_LG)
                .color(scheme.text),
        )
        .push(
            text(i18n.tr("contact-subtitle"))
                .size(typography::BODY)
                .color(scheme.text_secondary()),
        );

    let body = Row::new()
        .spacing(spacing::XL)
        .push(details_panel(i18n, scheme))
        .push(form_panel(state, i18n, scheme));

    Column::new()
        .spacing(spacing::XL)
        .align_x(Alignment::Center)
        .push(heading)
        .push(body)
        .into()
}

fn details_panel<'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).push(
        text(i18n.tr("contact-connect-title"))
            .size(typography::TITLE_SM)
            .color(scheme.text),
    );

    for detail in content::CONTACT_DETAILS {
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    text(i18n.tr(detail.label_key))
                        .size(typography::CAPTION)
                        .color(scheme.text_secondary()),
                )
                .push(
                    text(detail.value)
                        .size(typography::BODY)
                        .color(scheme.text),
                ),
        );
    }

    let mut socials = Column::new().spacing(spacing::XXS);
    for link in content::SOCIAL_LINKS {
        socials = socials.push(
            text(format!("{} · {}", link.name, link.url))
                .size(typography::CAPTION)
                .color(scheme.text_secondary()),
        );
    }
    column = column.push(socials);

    container(column)
        .style(styles::container::card(&scheme))
        .padding(spacing::LG)
        .width(Length::FillPortion(2))
        .into()
}

fn form_panel<'a>(state: &'a State, i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let mut form = Column::new().spacing(spacing::MD);

    form = form.push(field(
        i18n,
        scheme,
        state,
        Field::Name,
        "contact-field-name",
        &state.draft.name,
    ));
    form = form.push(field(
        i18n,
        scheme,
        state,
        Field::Email,
        "contact-field-email",
        &state.draft.email,
    ));
    form = form.push(field(
        i18n,
        scheme,
        state,
        Field::Subject,
        "contact-field-subject",
        &state.draft.subject,
    ));
    form = form.push(field(
        i18n,
        scheme,
        state,
        Field::Message,
        "contact-field-message",
        &state.draft.message,
    ));

    let pending = state.status == SubmitStatus::Pending;
    let submit_label = if pending {
        i18n.tr("contact-sending")
    } else {
        i18n.tr("contact-send")
    };
    let mut submit = button(text(submit_label).size(typography::BODY_LG))
        .style(styles::button::primary(&scheme))
        .padding([spacing::SM, spacing::XL]);
    if !pending {
        submit = submit.on_press(Message::Submit);
    }
    form = form.push(submit);

    match state.status {
        SubmitStatus::Succeeded => {
            form = form.push(banner(i18n.tr("contact-success"), scheme, true));
        }
        SubmitStatus::Failed => {
            form = form.push(banner(i18n.tr("contact-error"), scheme, false));
        }
        _ => {}
    }

    container(form)
        .style(styles::container::card(&scheme))
        .padding(spacing::LG)
        .width(Length::FillPortion(3))
        .into()
}

fn field<'a>(
    i18n: &I18n,
    scheme: ColorScheme,
    state: &'a State,
    form_field: Field,
    placeholder_key: &str,
    value: &'a str,
) -> Element<'a, Message> {
    let error = state.error_for(form_field);

    let input = text_input(&i18n.tr(placeholder_key), value)
        .on_input(move |value| Message::FieldChanged(form_field, value))
        .style(styles::text_input::form(&scheme, error.is_some()))
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let mut column = Column::new().spacing(spacing::XXS).push(input);
    if let Some(error) = error {
        column = column.push(
            text(i18n.tr(error.i18n_key()))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }
    column.into()
}

fn banner<'a>(message: String, scheme: ColorScheme, success: bool) -> Element<'a, Message> {
    container(text(message).size(typography::BODY))
        .style(styles::container::status_banner(&scheme, success))
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Shrink)
        .max_width(sizing::CONTENT_WIDTH)
        .into()
}
