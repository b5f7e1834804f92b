//! Card construction kit for CI pipeline notifications.
//!
//! Provides the typed Adaptive Card document model, the immutable run
//! context snapshot, and the builder that assembles one notification card
//! per pipeline run. Network and process concerns live in the consuming
//! binary; this crate stays side-effect free apart from the injected
//! [`AvatarSource`].

pub mod card;
pub mod context;
pub mod keys;

pub use card::builder::{AvatarSource, BuildOutput, CardBuilder, StatusInfo, resolve_status, resolve_version};
pub use card::catalog::{ActionKind, FactKind};
pub use card::types::{
    Action,
    AdaptiveCard,
    Attachment,
    CardEnvelope,
    Column,
    ColumnSet,
    Container,
    Element,
    Fact,
    FactSet,
    Image,
    Table,
    TableCell,
    TableColumn,
    TableRow,
    TextBlock,
};
pub use context::RunContext;
