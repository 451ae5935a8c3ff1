//! Vocabulary shared with the excluded collaborators: the infix→postfix
//! frontend, the built-in function table and standard library embedding, and
//! the runtime VM. None of these are implemented here — the core only needs
//! to name the shapes that reach it, since the infix pipeline lowers
//! everything to tokens before the core ever sees them.

mod builtins;
mod modes;

pub use builtins::{BuiltinDescriptor, ExportedSymbol, LibraryModule};
pub use modes::Mode;
