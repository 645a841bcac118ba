//! Generated module wrappers.
//!
//! Each inlined dependency becomes a cache cell plus an accessor function:
//!
//! ```lua
//! local __lumin_cache_1 = { nil, false }
//! local function __lumin_require_1()
//!   local function __lumin_body()
//!     -- dependency tokens
//!   end
//!   if not __lumin_cache_1[2] then
//!     __lumin_cache_1[1] = __lumin_body()
//!     __lumin_cache_1[2] = true
//!   end
//!   return __lumin_cache_1[1]
//! end
//! ```
//!
//! The body runs at most once however many call sites reach the accessor.

use lumin_lexer::{tokenize, Token};

use crate::PackError;

const GENERATED_ORIGIN: &str = "<generated wrapper>";

pub(crate) fn cache_name(id: u32) -> String {
    format!("__lumin_cache_{id}")
}

pub(crate) fn accessor_name(id: u32) -> String {
    format!("__lumin_require_{id}")
}

/// The three tokens replacing a `require(...)` call.
pub(crate) fn accessor_call(id: u32) -> [Token; 3] {
    [Token::word(accessor_name(id)), Token::lparen(), Token::rparen()]
}

/// Append the wrapper for module `id` with `body` as its contents.
pub(crate) fn emit(out: &mut Vec<Token>, id: u32, body: Vec<Token>) -> Result<(), PackError> {
    let cache = cache_name(id);
    let accessor = accessor_name(id);

    let prologue = format!(
        "local {cache} = {{ nil, false }}\n\
         local function {accessor}()\n\
         local function __lumin_body()\n"
    );
    // The newline keeps a trailing line comment in `body` from eating `end`.
    let epilogue = format!(
        "\nend\n\
         if not {cache}[2] then\n\
         {cache}[1] = __lumin_body()\n\
         {cache}[2] = true\n\
         end\n\
         return {cache}[1]\n\
         end\n"
    );

    out.extend(generated(&prologue)?);
    out.extend(body);
    out.extend(generated(&epilogue)?);
    Ok(())
}

fn generated(source: &str) -> Result<Vec<Token>, PackError> {
    tokenize(source).map_err(|e| PackError::lex(GENERATED_ORIGIN, e))
}
