use crate::domain::common::{AggregateRoot, RecordId};

/// URLs of one REST resource:
///
/// - `GET    {base}`                      list
/// - `POST   {base}`                      create
/// - `PUT    {base}/{id}`                 update
/// - `PATCH  {base}/{id}/toggle-status`   flip `status`
/// - `DELETE {base}/{id}`                 delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndpoints {
    base: String,
}

impl ResourceEndpoints {
    pub fn new(api_base: &str, collection: &str) -> Self {
        Self {
            base: format!(
                "{}/{}",
                api_base.trim_end_matches('/'),
                collection.trim_matches('/')
            ),
        }
    }

    pub fn for_aggregate<R: AggregateRoot>(api_base: &str) -> Self {
        Self::new(api_base, R::collection_name())
    }

    pub fn collection(&self) -> &str {
        &self.base
    }

    pub fn item(&self, id: &RecordId) -> String {
        format!("{}/{}", self.base, urlencoding::encode(&id.to_string()))
    }

    pub fn toggle_status(&self, id: &RecordId) -> String {
        format!("{}/toggle-status", self.item(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let ep = ResourceEndpoints::new("http://localhost:3000/api/", "boards");
        assert_eq!(ep.collection(), "http://localhost:3000/api/boards");
        assert_eq!(ep.item(&RecordId::Number(5)), "http://localhost:3000/api/boards/5");
        assert_eq!(
            ep.toggle_status(&RecordId::Number(5)),
            "http://localhost:3000/api/boards/5/toggle-status"
        );
    }

    #[test]
    fn test_string_ids_are_encoded() {
        let ep = ResourceEndpoints::new("/api", "/log-moods/");
        assert_eq!(ep.collection(), "/api/log-moods");
        assert_eq!(ep.item(&RecordId::Text("a b/c".to_string())), "/api/log-moods/a%20b%2Fc");
    }
}
