//! Require resolution and inlining.
//!
//! Walks a token stream, replaces every `require("literal.path")` with a
//! call to a generated accessor, and prepends one wrapper per distinct
//! dependency (see the `wrapper` module for the generated Lua).
//!
//! # Algorithm
//!
//! ```text
//! resolve(tokens)
//!   ├── reset cache
//!   ├── inline_requires(tokens)          depth-first:
//!   │     require "a.b" ──► a/b.lua ──► tokenize ──► inline_requires ──► register
//!   └── wrappers (registration order) ++ rewritten program
//! ```
//!
//! Dependencies are registered after their own dependencies, so emitting
//! in registration order defines every accessor before any wrapper that
//! calls it.

use std::path::{Path, PathBuf};

use lumin_lexer::{tokenize, Token, TokenKind};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::blocks::remove_delete_blocks;
use crate::loader::{is_unopenable, normalize_path, SourceLoader};
use crate::{wrapper, PackError, PackOptions, LUA_EXTENSION};

/// A `require` whose target could not be loaded. The call was left as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingRequire {
    /// Module name as written in the source (`"a.b"`).
    pub module: String,
    /// File the module name resolved to.
    pub path: PathBuf,
}

/// One inlined dependency.
struct CachedModule {
    id: u32,
    tokens: Vec<Token>,
}

/// Path-keyed dependency cache preserving registration order.
#[derive(Default)]
struct DependencyCache {
    index: FxHashMap<PathBuf, usize>,
    modules: Vec<CachedModule>,
}

impl DependencyCache {
    fn id_of(&self, path: &Path) -> Option<u32> {
        self.index.get(path).map(|&i| self.modules[i].id)
    }

    fn insert(&mut self, path: PathBuf, module: CachedModule) {
        self.index.insert(path, self.modules.len());
        self.modules.push(module);
    }

    fn len(&self) -> usize {
        self.modules.len()
    }
}

/// Require resolver.
///
/// The dependency cache is reset on every [`resolve`](Self::resolve) call.
/// The id counter is not: ids keep increasing over the resolver's lifetime,
/// so generated names never repeat within one resolver.
pub struct Resolver<'a> {
    options: &'a PackOptions,
    loader: &'a dyn SourceLoader,
    next_id: u32,
    cache: DependencyCache,
    /// Files currently being resolved, outermost first.
    in_progress: Vec<PathBuf>,
    missing: Vec<MissingRequire>,
}

impl<'a> Resolver<'a> {
    pub fn new(options: &'a PackOptions, loader: &'a dyn SourceLoader) -> Self {
        Resolver {
            options,
            loader,
            next_id: 1,
            cache: DependencyCache::default(),
            in_progress: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Inline every literal `require` reachable from `tokens`.
    ///
    /// Returns the generated wrappers followed by the rewritten program.
    pub fn resolve(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, PackError> {
        self.cache = DependencyCache::default();
        self.in_progress.clear();
        self.missing.clear();

        let program = self.inline_requires(&tokens)?;
        let cache = std::mem::take(&mut self.cache);
        debug!(modules = cache.len(), "resolved requires");

        let mut out = Vec::with_capacity(program.len());
        for module in cache.modules {
            wrapper::emit(&mut out, module.id, module.tokens)?;
        }
        out.extend(program);
        Ok(out)
    }

    /// Requires from the last [`resolve`](Self::resolve) call whose target
    /// could not be loaded.
    pub fn missing(&self) -> &[MissingRequire] {
        &self.missing
    }

    /// Consume the resolver, keeping only [`missing`](Self::missing).
    pub fn into_missing(self) -> Vec<MissingRequire> {
        self.missing
    }

    /// Map a module name to its file: dots become directory separators and
    /// the Lua extension is appended, relative to the project root.
    pub fn module_path(&self, module: &str) -> PathBuf {
        let mut path = self.options.root.clone();
        for component in module.split('.') {
            path.push(component);
        }
        normalize_path(&path.with_extension(LUA_EXTENSION))
    }

    fn inline_requires(&mut self, tokens: &[Token]) -> Result<Vec<Token>, PackError> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(call) = match_require(tokens, i) {
                if let Some(id) = self.dependency(call.module)? {
                    out.extend(wrapper::accessor_call(id));
                    i = call.end;
                    continue;
                }
            }
            out.push(tokens[i].clone());
            i += 1;
        }
        Ok(out)
    }

    /// Id of the wrapper for `module`, resolving and registering it first if
    /// needed. `None` if the file cannot be opened; a file that opens but
    /// cannot be used is an error.
    fn dependency(&mut self, module: &str) -> Result<Option<u32>, PackError> {
        let path = self.module_path(module);
        if let Some(id) = self.cache.id_of(&path) {
            return Ok(Some(id));
        }
        if self.in_progress.contains(&path) {
            let mut chain = self.in_progress.clone();
            chain.push(path);
            return Err(PackError::CyclicRequire { chain });
        }

        let source = match self.loader.load_text(&path) {
            Ok(source) => source,
            Err(error) if is_unopenable(&error) => {
                warn!(
                    module,
                    path = %path.display(),
                    %error,
                    "cannot open required file; leaving require call in place"
                );
                self.missing.push(MissingRequire {
                    module: module.to_string(),
                    path,
                });
                return Ok(None);
            }
            Err(error) => return Err(PackError::read(path, error)),
        };

        let origin = path.display().to_string();
        let mut tokens = tokenize(&source).map_err(|e| PackError::lex(origin, e))?;
        if self.options.delete_blocks {
            tokens = remove_delete_blocks(tokens)?;
        }

        self.in_progress.push(path.clone());
        let resolved = self.inline_requires(&tokens);
        self.in_progress.pop();
        let resolved = resolved?;

        let id = self.next_id;
        self.next_id += 1;
        debug!(module, path = %path.display(), id, "inlined dependency");
        self.cache.insert(
            path,
            CachedModule {
                id,
                tokens: resolved,
            },
        );
        Ok(Some(id))
    }
}

/// A recognised `require` call.
struct RequireCall<'t> {
    /// Module name with the string delimiters removed.
    module: &'t str,
    /// Index one past the call's last token.
    end: usize,
}

/// Match `require "m"` or `require ( "m" )` starting at `start`, allowing
/// whitespace and comments between the parts. Anything else (a variable
/// argument, a concatenation) is not a literal require.
fn match_require(tokens: &[Token], start: usize) -> Option<RequireCall<'_>> {
    if !tokens[start].is_word("require") {
        return None;
    }
    let next = next_code(tokens, start + 1)?;
    let (argument, end) = match tokens[next].kind {
        TokenKind::String => (next, next + 1),
        TokenKind::LParen => {
            let argument = next_code(tokens, next + 1)?;
            if tokens[argument].kind != TokenKind::String {
                return None;
            }
            let close = next_code(tokens, argument + 1)?;
            if tokens[close].kind != TokenKind::RParen {
                return None;
            }
            (argument, close + 1)
        }
        _ => return None,
    };
    Some(RequireCall {
        module: literal_contents(&tokens[argument].text)?,
        end,
    })
}

/// Index of the first non-trivia token at or after `from`.
fn next_code(tokens: &[Token], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !tokens[i].is_trivia())
}

/// The text between a string literal's delimiters.
///
/// Handles `"..."`, `'...'`, and long brackets `[==[...]==]`. Escape
/// sequences are not interpreted.
pub fn literal_contents(literal: &str) -> Option<&str> {
    let bytes = literal.as_bytes();
    match bytes.first()? {
        b'"' | b'\'' if literal.len() >= 2 => Some(&literal[1..literal.len() - 1]),
        b'[' => {
            let level = bytes[1..].iter().take_while(|&&b| b == b'=').count();
            let delimiter = level + 2;
            if literal.len() < delimiter * 2 {
                return None;
            }
            Some(&literal[delimiter..literal.len() - delimiter])
        }
        _ => None,
    }
}
