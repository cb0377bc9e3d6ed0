//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Каждый справочник рендерится общей страницей `resource_page::<R>()`.

use crate::shared::resource_page::resource_page;
use contracts::domain::a001_board::Board;
use contracts::domain::a002_branch::Branch;
use contracts::domain::a003_city::City;
use contracts::domain::a004_class::Class;
use contracts::domain::a005_division::Division;
use contracts::domain::a006_emotion::Emotion;
use contracts::domain::a007_institute::Institute;
use contracts::domain::a008_log_mood::LogMood;
use contracts::domain::a009_school::School;
use contracts::domain::a010_zone::Zone;
use leptos::prelude::*;

/// Контент таба по ключу. Неизвестный ключ даёт заглушку.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ── Учебные структуры ─────────────────────────────────────────────
        "a001_board" => resource_page::<Board>().into_any(),
        "a002_branch" => resource_page::<Branch>().into_any(),
        "a004_class" => resource_page::<Class>().into_any(),
        "a005_division" => resource_page::<Division>().into_any(),
        "a007_institute" => resource_page::<Institute>().into_any(),
        "a009_school" => resource_page::<School>().into_any(),

        // ── География ─────────────────────────────────────────────────────
        "a003_city" => resource_page::<City>().into_any(),
        "a010_zone" => resource_page::<Zone>().into_any(),

        // ── Самочувствие ──────────────────────────────────────────────────
        "a006_emotion" => resource_page::<Emotion>().into_any(),
        "a008_log_mood" => resource_page::<LogMood>().into_any(),

        _ => {
            log::warn!("Unknown tab key: '{}'", key);
            view! {
                <div class="page">
                    <div class="alert alert--warning">{format!("Unknown page: {}", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}
