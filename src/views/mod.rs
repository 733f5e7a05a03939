//! Server-rendered pages.
//!
//! Handlers only build a [`ViewContext`]; turning it into markup is the
//! job of a [`Renderer`]. The built-in [`HtmlRenderer`] is deliberately
//! plain: a title, a heading and the context laid out as a definition list.

pub mod html;
pub mod pages;

use serde_json::{Map, Value};
use thiserror::Error;

pub use html::HtmlRenderer;

/// Template variables for one page render.
pub type ViewContext = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown view `{0}`")]
    UnknownView(String),
}

/// Turns a (view name, context) pair into an HTML document.
pub trait Renderer: Send + Sync {
    fn render(&self, view: &str, context: &ViewContext) -> Result<String, RenderError>;
}
