use serde::Serialize;

/// Result of a dialog the user could dismiss.
///
/// `Cancelled` covers every non-zero exit of the dialog program: the cancel
/// or no button, Escape, and failures of the program itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Outcome<T> {
    Accepted(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Outcome::Accepted(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Accepted(value) => Outcome::Accepted(f(value)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use serde_json::json;

    #[test]
    fn empty_text_is_still_accepted() {
        let outcome = Outcome::Accepted(String::new());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.accepted(), Some(String::new()));
    }

    #[test]
    fn cancelled_maps_to_cancelled() {
        let outcome: Outcome<String> = Outcome::Cancelled;
        assert_eq!(outcome.map(|text| text.len()), Outcome::Cancelled);
    }

    #[test]
    fn serializes_with_status_tag() {
        let accepted = serde_json::to_value(Outcome::Accepted("db")).expect("json");
        assert_eq!(accepted, json!({ "status": "accepted", "value": "db" }));
        let cancelled = serde_json::to_value(Outcome::<String>::Cancelled).expect("json");
        assert_eq!(cancelled, json!({ "status": "cancelled" }));
    }
}
