//! Assembles one notification card from a run context snapshot.

use chrono::{DateTime, Utc};

use crate::card::catalog::{ActionKind, FactKind, split_list};
use crate::card::types::{
    Action, AdaptiveCard, CardEnvelope, Column, ColumnSet, Container, Element, Fact, FactSet,
    Image, Table, TableCell, TableColumn, TableRow, TextBlock,
};
use crate::context::RunContext;
use crate::keys;

/// Resolves an avatar reference into an inline image source.
///
/// The builder treats any error as non-fatal: it records a warning and
/// falls back to the raw reference string.
pub trait AvatarSource {
    fn data_uri(&self, url: &str) -> anyhow::Result<String>;
}

/// Effective pipeline status after the override has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusInfo {
    pub effective: String,
    pub overridden: bool,
}

/// Result of one card build. `warnings` never fail the build; the caller
/// decides how to surface them.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub card: CardEnvelope,
    pub version: String,
    pub status: StatusInfo,
    pub warnings: Vec<String>,
}

/// The reported status, unless a non-empty override value takes precedence.
pub fn resolve_status(ctx: &RunContext) -> StatusInfo {
    let reported = ctx.get(keys::BUILD_STATUS, "");
    let override_value = ctx.get(keys::STATUS_OVERRIDE, "");
    if override_value.is_empty() {
        StatusInfo {
            effective: reported,
            overridden: false,
        }
    } else {
        StatusInfo {
            effective: override_value,
            overridden: true,
        }
    }
}

/// Tag verbatim when present, else the short commit hash, else empty.
pub fn resolve_version(ctx: &RunContext) -> String {
    let tag = ctx.get(keys::COMMIT_TAG, "");
    if !tag.is_empty() {
        return tag;
    }
    ctx.get(keys::COMMIT_SHA, "").chars().take(7).collect()
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().to_string()
}

/// Builds the card document for one run.
pub struct CardBuilder<'a> {
    ctx: &'a RunContext,
    now: DateTime<Utc>,
    warnings: Vec<String>,
}

impl<'a> CardBuilder<'a> {
    pub fn new(ctx: &'a RunContext, now: DateTime<Utc>) -> Self {
        Self {
            ctx,
            now,
            warnings: Vec::new(),
        }
    }

    pub fn build(mut self, avatar: &dyn AvatarSource) -> BuildOutput {
        let status = resolve_status(self.ctx);
        let version = resolve_version(self.ctx);
        let (color, title) = match status.effective.as_str() {
            "failure" => ("attention", "❌ Pipeline failed"),
            _ => ("good", "✔ Pipeline succeeded"),
        };

        let avatar_url = self.resolve_avatar(avatar);

        let mut body = vec![self.status_container(color, title, avatar_url)];
        if let Some(facts) = self.facts_section(&version) {
            body.push(facts);
        }
        body.extend(self.variables_blocks());

        let card = CardEnvelope::message(AdaptiveCard::new(body, self.actions()));
        BuildOutput {
            card,
            version,
            status,
            warnings: self.warnings,
        }
    }

    fn resolve_avatar(&mut self, avatar: &dyn AvatarSource) -> String {
        let reference = self.ctx.get(keys::COMMIT_AUTHOR_AVATAR, "");
        if reference.is_empty() {
            return reference;
        }
        match avatar.data_uri(&reference) {
            Ok(uri) => uri,
            Err(err) => {
                self.warnings
                    .push(format!("failed to process avatar image: {err}"));
                reference
            }
        }
    }

    /// Header container: status headline plus the author column set, bled
    /// to the card edge and tinted with the status color.
    fn status_container(&self, color: &str, title: &str, avatar_url: String) -> Element {
        Element::Container(Container {
            bleed: Some(true),
            spacing: Some("None".to_string()),
            style: Some(color.to_string()),
            items: vec![
                Element::TextBlock(TextBlock {
                    text: title.to_string(),
                    weight: Some("bolder".to_string()),
                    size: Some("medium".to_string()),
                    color: Some(color.to_string()),
                    ..Default::default()
                }),
                self.author_section(avatar_url),
            ],
        })
    }

    fn author_section(&self, avatar_url: String) -> Element {
        // The endpoint formats the timestamp itself; the card only embeds
        // the date/time directives around the raw UTC instant.
        let date = self.now.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        Element::ColumnSet(ColumnSet {
            columns: vec![
                Column::new(
                    "auto",
                    vec![Element::Image(Image {
                        url: avatar_url,
                        size: Some("small".to_string()),
                        style: Some("Person".to_string()),
                    })],
                ),
                Column::new(
                    "stretch",
                    vec![
                        Element::TextBlock(TextBlock {
                            text: format!("@{}", self.ctx.get(keys::COMMIT_AUTHOR, "")),
                            weight: Some("bolder".to_string()),
                            wrap: Some(true),
                            ..Default::default()
                        }),
                        Element::TextBlock(TextBlock {
                            text: format!("{{{{DATE({date}, SHORT)}}}} at {{{{TIME({date})}}}}"),
                            spacing: Some("None".to_string()),
                            is_subtle: Some(true),
                            wrap: Some(true),
                            ..Default::default()
                        }),
                    ],
                ),
            ],
        })
    }

    fn fact_value(&self, kind: FactKind, version: &str) -> Fact {
        let value = match kind {
            FactKind::Project => self.ctx.get(keys::REPO, ""),
            FactKind::Message => first_line(&self.ctx.get(keys::COMMIT_MESSAGE, "")),
            FactKind::Version => version.to_string(),
        };
        Fact::new(kind.title(), value)
    }

    /// `None` when the selection filters the catalog down to nothing; an
    /// empty facts block must not render.
    fn facts_section(&self, version: &str) -> Option<Element> {
        let requested = self.ctx.get(keys::FACTS, "");
        let kinds: Vec<FactKind> = if requested.is_empty() {
            FactKind::ALL.to_vec()
        } else {
            split_list(&requested).filter_map(FactKind::from_name).collect()
        };
        if kinds.is_empty() {
            return None;
        }

        let facts = kinds
            .into_iter()
            .map(|kind| self.fact_value(kind, version))
            .collect();
        Some(Element::Container(Container {
            items: vec![Element::FactSet(FactSet { facts })],
            ..Default::default()
        }))
    }

    /// Header line plus a 1:2 two-column table, one row per listed name.
    /// Values default to empty for unset variables.
    fn variables_blocks(&self) -> Vec<Element> {
        let raw = self.ctx.get(keys::VARIABLES, "");
        if raw.is_empty() {
            return Vec::new();
        }

        let rows = split_list(&raw)
            .map(|name| {
                TableRow::new(vec![
                    TableCell::monospace(name),
                    TableCell::monospace(self.ctx.get(name, "")),
                ])
            })
            .collect();

        vec![
            Element::TextBlock(TextBlock {
                text: "Variables:".to_string(),
                weight: Some("bolder".to_string()),
                wrap: Some(true),
                ..Default::default()
            }),
            Element::Table(Table {
                columns: vec![TableColumn { width: 1 }, TableColumn { width: 2 }],
                spacing: Some("Small".to_string()),
                show_grid_lines: false,
                first_row_as_headers: false,
                rows,
            }),
        ]
    }

    fn actions(&self) -> Vec<Action> {
        let tag = self.ctx.get(keys::COMMIT_TAG, "");
        let pipeline = Action::open_url(
            ActionKind::Pipeline.title(),
            self.ctx.get(keys::PIPELINE_URL, ""),
        );
        let secondary = if tag.is_empty() {
            (
                ActionKind::Commit,
                Action::open_url(
                    ActionKind::Commit.title(),
                    self.ctx.get(keys::PIPELINE_FORGE_URL, ""),
                ),
            )
        } else {
            (
                ActionKind::Release,
                Action::open_url(
                    ActionKind::Release.title(),
                    format!("{}/releases/tag/{}", self.ctx.get(keys::REPO_URL, ""), tag),
                ),
            )
        };
        let available = [(ActionKind::Pipeline, pipeline), secondary];

        let requested = self.ctx.get(keys::BUTTONS, "");
        if requested.is_empty() {
            return available.into_iter().map(|(_, action)| action).collect();
        }
        split_list(&requested)
            .filter_map(ActionKind::from_name)
            .filter_map(|kind| {
                available
                    .iter()
                    .find(|(candidate, _)| *candidate == kind)
                    .map(|(_, action)| action.clone())
            })
            .collect()
    }
}
