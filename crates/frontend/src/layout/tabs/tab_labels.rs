//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Заголовок справочника - его `list_name` из contracts.

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
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: пустая строка (неизвестный ключ).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_board" => Board::list_name(),
        "a002_branch" => Branch::list_name(),
        "a003_city" => City::list_name(),
        "a004_class" => Class::list_name(),
        "a005_division" => Division::list_name(),
        "a006_emotion" => Emotion::list_name(),
        "a007_institute" => Institute::list_name(),
        "a008_log_mood" => LogMood::list_name(),
        "a009_school" => School::list_name(),
        "a010_zone" => Zone::list_name(),
        _ => "",
    }
}
