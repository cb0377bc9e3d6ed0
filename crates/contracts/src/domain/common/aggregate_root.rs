use super::EntityMetadata;
use crate::shared::form::FormSchema;
use crate::shared::list::{Identified, Sortable};
use crate::shared::metadata::FieldMetadata;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Трейт для корня агрегата (записи справочника)
///
/// Определяет обязательные методы и метаданные для всех справочников системы
///
/// Записи живут в реактивных сигналах UI, отсюда `Send + Sync + 'static`
pub trait AggregateRoot:
    Clone + PartialEq + Serialize + DeserializeOwned + Identified + Sortable + Send + Sync + 'static
{
    /// Форма создания/редактирования
    type Dto: FormSchema + Send + Sync + 'static;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Активна ли запись (флаг переключается через toggle-status)
    fn status(&self) -> bool;

    /// Название записи для заголовков и диалогов
    fn display_name(&self) -> &str;

    /// Служебные даты создания/изменения
    fn metadata(&self) -> &EntityMetadata;

    /// Заполнить форму редактирования из записи
    fn to_dto(&self) -> Self::Dto;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя сущности в snake_case (например, "log_mood")
    fn entity_name() -> &'static str;

    /// Сегмент пути REST API (например, "log-moods")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Поля формы; они же колонки списка и строки обзора
    fn field_metadata() -> &'static [FieldMetadata] {
        Self::Dto::field_metadata()
    }

    /// Колонки таблицы списка
    fn list_columns() -> Vec<&'static FieldMetadata> {
        Self::field_metadata()
            .iter()
            .filter(|f| f.visible_in_list())
            .collect()
    }

    /// Полное имя агрегата для системы (например, "a001_board"), ключ таба
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::entity_name())
    }
}

/// Значение `status` по умолчанию, если сервер его не прислал
pub fn default_active() -> bool {
    true
}
