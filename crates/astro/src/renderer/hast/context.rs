//! Lowering context for the hast renderer.

use super::Options;

/// Represents the type of scope currently being lowered.
///
/// Used to decide whether paragraphs inside a list keep their `<p>` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Document root - not inside any specific block element.
    Root,
    /// Inside a list element (`<ul>` or `<ol>`).
    List {
        /// Loose lists keep `<p>` around item paragraphs.
        spread: bool,
    },
    /// Inside a blockquote.
    Blockquote,
    /// Inside a table.
    Table,
}

/// Tracks lowering state while walking the markdown AST.
pub struct Context<'a> {
    stack: Vec<Scope>,
    options: &'a Options,
}

impl<'a> Context<'a> {
    /// Creates a new context positioned at the document root.
    pub fn new(options: &'a Options) -> Self {
        Self {
            stack: vec![Scope::Root],
            options,
        }
    }

    /// Pushes a new scope onto the stack.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Pops the current scope. The root scope is never popped.
    pub fn exit(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Returns the current scope.
    pub fn current(&self) -> Scope {
        self.stack.last().copied().unwrap_or(Scope::Root)
    }

    /// True when the nearest scope is a tight (non-spread) list.
    pub fn is_in_tight_list(&self) -> bool {
        matches!(self.current(), Scope::List { spread: false })
    }

    /// Returns whether raw HTML passthrough is enabled.
    pub fn raw_html_allowed(&self) -> bool {
        self.options.allow_raw_html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tight_list_is_only_the_nearest_scope() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        assert_eq!(ctx.current(), Scope::Root);

        ctx.enter(Scope::List { spread: false });
        assert!(ctx.is_in_tight_list());

        ctx.enter(Scope::Blockquote);
        assert!(!ctx.is_in_tight_list());

        ctx.exit();
        ctx.exit();
        ctx.exit();
        assert_eq!(ctx.current(), Scope::Root);
    }
}
