//! Sidebar: справочники, сгруппированные по разделам

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "academic",
            label: "Academic",
            icon: "school",
            items: vec![
                ("a001_board", tab_label_for_key("a001_board"), "book"),
                ("a007_institute", tab_label_for_key("a007_institute"), "building"),
                ("a002_branch", tab_label_for_key("a002_branch"), "git-branch"),
                ("a009_school", tab_label_for_key("a009_school"), "school"),
                ("a004_class", tab_label_for_key("a004_class"), "layers"),
                ("a005_division", tab_label_for_key("a005_division"), "grid"),
            ],
        },
        MenuGroup {
            id: "geography",
            label: "Geography",
            icon: "map",
            items: vec![
                ("a003_city", tab_label_for_key("a003_city"), "map-pin"),
                ("a010_zone", tab_label_for_key("a010_zone"), "map"),
            ],
        },
        MenuGroup {
            id: "wellbeing",
            label: "Wellbeing",
            icon: "smile",
            items: vec![
                ("a006_emotion", tab_label_for_key("a006_emotion"), "smile"),
                ("a008_log_mood", tab_label_for_key("a008_log_mood"), "activity"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext not found");
        return ().into_any();
    };

    // Все разделы раскрыты при старте
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|g| g.contains(&group_id_for_exp))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        let groups = get_menu_groups();
        let items: Vec<_> = groups.iter().flat_map(|g| g.items.iter()).collect();
        assert_eq!(items.len(), 10);
        for (id, label, _) in items {
            assert!(!label.is_empty(), "menu item {} has no label", id);
        }
    }
}
