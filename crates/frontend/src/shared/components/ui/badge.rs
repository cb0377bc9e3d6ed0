use leptos::prelude::*;

/// Цвет бейджа в заголовке формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Primary,
    Success,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "badge badge--primary",
            Self::Success => "badge badge--success",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Active/Inactive badge of a record
#[component]
pub fn StatusBadge(
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            "badge badge--status badge--status-active"
        } else {
            "badge badge--status badge--status-inactive"
        }
    };

    view! {
        <span class=class>
            {move || if active.get() { "Active" } else { "Inactive" }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes() {
        assert_eq!(BadgeTone::default().class(), "badge badge--primary");
        assert_eq!(BadgeTone::Success.class(), "badge badge--success");
    }
}
