//! Fixed catalogs of facts and actions.
//!
//! Both catalogs are closed sets. Selection lists filter and reorder over
//! the catalog; unknown names are silently dropped. When no list is given,
//! declaration order is the fixed default.

/// Facts the card can display, in declaration (default emission) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactKind {
    Project,
    Message,
    Version,
}

impl FactKind {
    pub const ALL: [FactKind; 3] = [FactKind::Project, FactKind::Message, FactKind::Version];

    pub fn name(self) -> &'static str {
        match self {
            FactKind::Project => "project",
            FactKind::Message => "message",
            FactKind::Version => "version",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FactKind::Project => "Project:",
            FactKind::Message => "Message:",
            FactKind::Version => "Version:",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Action buttons the card can carry. `Commit` and `Release` are mutually
/// exclusive: only one of them is available per run, depending on whether
/// the pipeline built a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Pipeline,
    Commit,
    Release,
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Pipeline => "pipeline",
            ActionKind::Commit => "commit",
            ActionKind::Release => "release",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActionKind::Pipeline => "View Pipeline",
            ActionKind::Commit => "View Commit",
            ActionKind::Release => "View Release",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [ActionKind::Pipeline, ActionKind::Commit, ActionKind::Release]
            .into_iter()
            .find(|kind| kind.name() == name)
    }
}

/// Split a comma-separated selection list into trimmed entries.
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_names_round_trip() {
        for kind in FactKind::ALL {
            assert_eq!(FactKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FactKind::from_name("bogus"), None);
        assert_eq!(FactKind::from_name(""), None);
    }

    #[test]
    fn action_names_round_trip() {
        assert_eq!(ActionKind::from_name("pipeline"), Some(ActionKind::Pipeline));
        assert_eq!(ActionKind::from_name("commit"), Some(ActionKind::Commit));
        assert_eq!(ActionKind::from_name("release"), Some(ActionKind::Release));
        assert_eq!(ActionKind::from_name("deploy"), None);
    }

    #[test]
    fn split_list_trims_entries() {
        let entries: Vec<&str> = split_list(" version , project ,message").collect();
        assert_eq!(entries, vec!["version", "project", "message"]);
    }
}
