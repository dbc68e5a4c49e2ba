use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::messages::{Message, auth};
use crate::state::LoginForm;
use crate::theme;

pub fn view(form: &LoginForm) -> Element<'_, Message> {
    let mut content = column![
        text("KINO").size(46).color(theme::TEXT_BRIGHT),
        Space::with_height(6),
        text("Welcome back!").size(28).color(theme::TEXT_PRIMARY),
        Space::with_height(24),
    ]
    .align_x(iced::Alignment::Center)
    .max_width(360);

    if let Some(info) = &form.info {
        content = content.push(text(info.as_str()).size(14).color(theme::SUCCESS));
        content = content.push(Space::with_height(12));
    }

    content = content.push(labeled_input(
        "Name",
        text_input("", &form.name)
            .on_input(|v| Message::Auth(auth::Message::NameChanged(v)))
            .padding(8)
            .style(theme::underline_input),
    ));
    content = content.push(Space::with_height(16));
    content = content.push(labeled_input(
        "Password",
        text_input("", &form.password)
            .secure(!form.show_password)
            .on_input(|v| Message::Auth(auth::Message::PasswordChanged(v)))
            .on_submit(Message::Auth(auth::Message::SubmitLogin))
            .padding(8)
            .style(theme::underline_input),
    ));
    content = content.push(
        row![
            Space::with_width(Length::Fill),
            button(
                text(if form.show_password { "hide" } else { "show" })
                    .size(12)
                    .color(theme::TEXT_DIMMED)
            )
            .on_press(Message::Auth(auth::Message::TogglePasswordVisibility))
            .style(theme::ghost_button),
        ]
        .width(Length::Fill),
    );

    if let Some(error) = &form.error {
        content = content.push(Space::with_height(10));
        content = content.push(text(error.as_str()).size(13).color(theme::DANGER));
    }

    content = content.push(Space::with_height(24));
    content = content.push(
        button(
            text(if form.submitting { "Logging in..." } else { "Log in" })
                .size(16)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe((!form.submitting).then_some(Message::Auth(auth::Message::SubmitLogin)))
        .style(theme::pill_button),
    );

    content = content.push(Space::with_height(16));
    content = content.push(
        row![
            text("Don't have an account?").size(13).color(theme::TEXT_DIMMED),
            button(text("Sign Up!").size(13))
                .on_press(Message::Auth(auth::Message::GoToSignUp))
                .style(theme::ghost_button),
        ]
        .spacing(4)
        .align_y(iced::Alignment::Center),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(theme::screen)
        .into()
}

fn labeled_input<'a>(
    label: &'a str,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message> {
    column![
        text(label).size(13).color(theme::TEXT_DIMMED),
        Space::with_height(2),
        input,
    ]
    .width(Length::Fill)
    .into()
}
