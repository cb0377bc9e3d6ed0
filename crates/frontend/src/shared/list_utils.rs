/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use crate::shared::config::config;
use contracts::shared::list::SortState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Разбивает текст на куски, помечая совпадения с фильтром (без учёта регистра)
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len(&text[pos..], &needle) {
            if plain_start < pos {
                parts.push((&text[plain_start..pos], false));
            }
            parts.push((&text[pos..pos + len], true));
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        parts.push((&text[plain_start..], false));
    }
    parts
}

/// Длина (в байтах) префикса `haystack`, равного `needle` без учёта регистра
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut lowered = String::new();
    for (idx, ch) in haystack.char_indices() {
        lowered.extend(ch.to_lowercase());
        if lowered.len() >= needle.len() {
            return (lowered == needle).then_some(idx + ch.len_utf8());
        }
        if !needle.starts_with(&lowered) {
            return None;
        }
    }
    None
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="search-match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let delay = config().list.search_debounce_ms;

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Замена таймера отменяет предыдущий (Timeout отменяется при drop)
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(delay, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => {
            if s.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Central Board", "board"),
            vec![("Central ", false), ("Board", true)]
        );
        assert_eq!(
            split_matches("aAa", "a"),
            vec![("a", true), ("A", true), ("a", true)]
        );
        assert_eq!(split_matches("Pune", ""), vec![("Pune", false)]);
        assert_eq!(split_matches("Pune", "xyz"), vec![("Pune", false)]);
        assert!(split_matches("", "a").is_empty());
    }

    #[test]
    fn test_split_matches_non_ascii() {
        assert_eq!(
            split_matches("Школа №5", "ШКОЛА"),
            vec![("Школа", true), (" №5", false)]
        );
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortState {
            field: "name".to_string(),
            ascending: false,
        };
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(&sort), "email"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }
}
