//! TypeScript declaration generation for Apps Script API descriptions.
//!
//! One category of the description becomes one ambient `.d.ts` module:
//! - `resolve` - type names at a use site, cross-category references
//! - `render` - enum and interface declarations
//! - `emitter` - per-category module assembly
//! - `config` - emission settings and compatibility overrides

mod config;
mod doc;
mod emitter;
mod render;
mod resolve;

#[cfg(test)]
mod config_tests;

pub use config::{Config, ExtendsRule, Overrides};
pub use doc::{doc_comment, method_doc};
pub use emitter::{CategoryOutput, Emitter};
pub use resolve::{References, Resolver, Site};

/// Errors raised while preparing an emitter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid duplicate-parameter override `{name}`: {source}")]
    InvalidParamRename {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Emit every category of `description` with `config`.
pub fn emit_all(
    description: &gasdts_core::Description,
    config: Config,
) -> Result<Vec<CategoryOutput>, Error> {
    Ok(Emitter::new(description, config)?.emit_all())
}
