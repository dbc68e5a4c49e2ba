use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::messages::{Message, auth};
use crate::state::SignUpForm;
use crate::theme;

pub fn view(form: &SignUpForm) -> Element<'_, Message> {
    let mut content = column![
        text("Sign Up!").size(34).color(theme::TEXT_BRIGHT),
        Space::with_height(4),
        text("Create an account to find your perfect movie match")
            .size(13)
            .color(theme::TEXT_DIMMED),
        Space::with_height(24),
    ]
    .align_x(iced::Alignment::Center)
    .max_width(360);

    content = content.push(field(
        "Email address",
        text_input("", &form.email)
            .on_input(|v| Message::Auth(auth::Message::EmailChanged(v)))
            .padding(8)
            .style(theme::underline_input),
    ));
    content = content.push(Space::with_height(14));
    content = content.push(field(
        "Username",
        text_input("", &form.name)
            .on_input(|v| Message::Auth(auth::Message::NameChanged(v)))
            .padding(8)
            .style(theme::underline_input),
    ));
    content = content.push(Space::with_height(14));
    content = content.push(field(
        "Password",
        text_input("", &form.password)
            .secure(!form.show_password)
            .on_input(|v| Message::Auth(auth::Message::PasswordChanged(v)))
            .on_submit(Message::Auth(auth::Message::SubmitRegister))
            .padding(8)
            .style(theme::underline_input),
    ));

    if let Some(error) = &form.error {
        content = content.push(Space::with_height(10));
        content = content.push(text(error.as_str()).size(13).color(theme::DANGER));
    }

    content = content.push(Space::with_height(24));
    content = content.push(
        button(
            text(if form.submitting { "Creating..." } else { "Create" })
                .size(16)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe((!form.submitting).then_some(Message::Auth(auth::Message::SubmitRegister)))
        .style(theme::pill_button),
    );

    content = content.push(Space::with_height(16));
    content = content.push(
        row![
            text("Already have an account?").size(13).color(theme::TEXT_DIMMED),
            button(text("Log in").size(13))
                .on_press(Message::Auth(auth::Message::GoToLogin))
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

fn field<'a>(label: &'a str, input: text_input::TextInput<'a, Message>) -> Element<'a, Message> {
    column![
        text(label).size(13).color(theme::TEXT_DIMMED),
        Space::with_height(2),
        input,
    ]
    .width(Length::Fill)
    .into()
}
