use serde::Serialize;
use std::fmt;

/// One named option plus its positional values, e.g. `--msgbox TEXT 10 40`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    name: &'static str,
    values: Vec<String>,
}

impl Flag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl ToString) -> Self {
        self.values.push(value.to_string());
        self
    }

    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.values
            .extend(values.into_iter().map(|value| value.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn resolve(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.values.len() + 1);
        out.push(format!("--{}", self.name));
        out.extend(self.values.iter().cloned());
        out
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_words::join(self.resolve()))
    }
}
