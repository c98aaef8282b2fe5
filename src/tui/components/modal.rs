//! Modal overlay and container
//!
//! `ModalOverlay` centers its children over the whole screen;
//! `ModalContainer` draws the bordered box with a title and footer line.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Predefined modal border colors
#[derive(Clone, Copy, Default)]
pub enum ModalBorderColor {
    #[default]
    Focused,
    Error,
    Info,
}

impl ModalBorderColor {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Error => theme().error,
            Self::Info => Color::Cyan,
        }
    }
}

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Column count; defaults to 60
    pub width: Option<u32>,
    pub border_color: Option<ModalBorderColor>,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.border_color.unwrap_or_default().to_color();
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: Size::Length(props.width.unwrap_or(60)),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: Color::Cyan, weight: Weight::Bold)
                }
            }))

            View(
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_border_color_default() {
        assert!(matches!(
            ModalBorderColor::default(),
            ModalBorderColor::Focused
        ));
    }

    #[test]
    fn test_error_border_uses_theme_error() {
        assert_eq!(ModalBorderColor::Error.to_color(), theme().error);
        assert_eq!(ModalBorderColor::Info.to_color(), Color::Cyan);
    }
}
