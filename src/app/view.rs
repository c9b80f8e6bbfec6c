// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::scene;
use crate::ui::theming::ColorScheme;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a, 'b> {
    pub scene: &'a scene::State,
    pub scheme: &'b ColorScheme,
}

/// Renders the eye scene filling the window.
pub fn view<'a>(ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
    Container::new(ctx.scene.view(ctx.scheme).map(Message::Scene))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
