use crate::domain::common::RecordId;
use std::cmp::Ordering;

/// Trait для записей с идентификатором (ключ замены при ответе сервера)
pub trait Identified {
    fn id(&self) -> &RecordId;
}

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым работает поиск (набор зависит от справочника).
    /// По ним же подсвечиваются совпадения в таблице.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Возвращает отображаемое значение указанного поля
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Проверяет, соответствует ли объект поисковому запросу.
    /// Пустой запрос соответствует всему.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Self::SEARCH_FIELDS.iter().any(|field| {
            self.get_field_value(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }

    fn is_search_field(field: &str) -> bool
    where
        Self: Sized,
    {
        Self::SEARCH_FIELDS.contains(&field)
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable: Searchable {
    /// Сравнивает два объекта по указанному полю (по умолчанию как текст без учёта регистра)
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let left = self.get_field_value(field).unwrap_or_default().to_lowercase();
        let right = other.get_field_value(field).unwrap_or_default().to_lowercase();
        left.cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contact {
        name: String,
        phone: String,
    }

    impl Searchable for Contact {
        const SEARCH_FIELDS: &'static [&'static str] = &["name"];

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "phone" => Some(self.phone.clone()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_only_search_fields_match_and_highlight() {
        let contact = Contact {
            name: "Delhi Office".to_string(),
            phone: "011-2345".to_string(),
        };

        assert!(contact.matches_filter("office"));
        assert!(contact.matches_filter(""));
        assert!(!contact.matches_filter("2345"));

        assert!(Contact::is_search_field("name"));
        assert!(!Contact::is_search_field("phone"));
    }
}
