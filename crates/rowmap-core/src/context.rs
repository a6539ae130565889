use indexmap::IndexMap;

/// Context of the statement that produced the rows being mapped.
///
/// The mapper never inspects it; it is handed to every
/// [`FieldMapper`](crate::FieldMapper) so overrides can report diagnostics.
#[derive(Debug, Clone, Default)]
pub struct StatementContext {
    /// Statement text, when the host provides it
    sql: Option<String>,

    /// Free-form attributes set by the host
    attributes: IndexMap<String, String>,
}

impl StatementContext {
    pub fn new() -> StatementContext {
        StatementContext::default()
    }

    pub fn with_sql(sql: impl Into<String>) -> StatementContext {
        StatementContext {
            sql: Some(sql.into()),
            attributes: IndexMap::new(),
        }
    }

    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
