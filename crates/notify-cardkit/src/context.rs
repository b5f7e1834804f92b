use std::collections::BTreeMap;

/// Immutable snapshot of the process environment for one notification run.
///
/// Captured once at startup and passed explicitly to every component; no
/// component reads ambient globals directly. The map keeps every variable
/// that was set, recognized or not, so arbitrary names can be looked up for
/// the variables table and the debug report can dump the full snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunContext {
    vars: BTreeMap<String, String>,
}

impl RunContext {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        std::env::vars().collect()
    }

    /// Look up `name`, falling back to `default` when the variable is
    /// absent or set to the empty string.
    pub fn get(&self, name: &str, default: &str) -> String {
        match self.vars.get(name) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        }
    }

    /// All captured variables, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for RunContext {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RunContext {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
