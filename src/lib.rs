pub mod config;
pub mod document;
pub mod error;
pub mod inliner;
pub mod input;
pub mod orchestrator;
pub mod transpiler;
pub mod utils;
pub mod workspace;

pub use config::{
    CssStyle, InlineSassOptions, InlineSassOptionsBuilder, InlinerOptions, SassOptions,
};
pub use error::{InlineSassError, Result};
pub use inliner::InlineOutcome;
pub use input::{InputOrigin, ResolvedInput, StylesheetBase, resolve_input};
pub use orchestrator::{InlineReport, inline_sass, inline_sass_with_report};
pub use transpiler::{CompiledStylesheet, SassCompiler};
pub use workspace::TempWorkspace;
