use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    /// Без фона, для иконок в заголовке
    Ghost,
}

impl ButtonKind {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button--primary",
            Self::Secondary => "button button--secondary",
            Self::Ghost => "button button--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)]
    kind: ButtonKind,
    /// Tooltip
    #[prop(optional, into)]
    title: Option<String>,
    /// `submit` для кнопки сохранения формы
    #[prop(optional)]
    submit: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=kind.class()
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert_eq!(ButtonKind::default(), ButtonKind::Primary);
        assert_eq!(ButtonKind::Primary.class(), "button button--primary");
        assert_eq!(ButtonKind::Ghost.class(), "button button--ghost");
    }
}
