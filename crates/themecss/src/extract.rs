//! Reading custom properties back out of a stylesheet.
//!
//! [`parse_css_variables`] walks a stylesheet with the `cssparser` rule
//! parsers and collects every `--name: value;` declaration, grouped by the
//! rule it appears in. Values are kept as their exact source text (trimmed),
//! so `calc(var(--spacing) * 4)` or a multi-line font stack come back as
//! written.
//!
//! ```rust
//! use themecss::extract::parse_css_variables;
//!
//! let vars = parse_css_variables(":root { --radius: 0.5rem; color: red; }\n.dark { --background: #000; }").unwrap();
//! assert_eq!(vars.root().and_then(|b| b.get("--radius")), Some("0.5rem"));
//! assert_eq!(vars.dark().and_then(|b| b.get("--background")), Some("#000"));
//! ```
//!
//! Ordinary properties (`color: red`) are skipped. Both plain rules
//! (`:root`, `.dark`) and block at-rules (`@theme inline`, `@media ...`) are
//! collected; nested rules inside a block are not.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::error::{Result, ThemeError};

pub const ROOT_SELECTOR: &str = ":root";
pub const DARK_SELECTOR: &str = ".dark";
pub const THEME_INLINE: &str = "@theme inline";

/// Custom properties declared in one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBlock {
    /// Selector text, or `@name prelude` for at-rules.
    pub selector: String,
    /// `(name, value)` pairs in source order. Names keep their `--` prefix.
    pub declarations: Vec<(String, String)>,
}

impl CssBlock {
    /// Value of the last declaration of `name`, as the cascade would resolve it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Every rule with its custom properties, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    blocks: Vec<CssBlock>,
}

impl CssVariables {
    /// First block with the given selector.
    pub fn block(&self, selector: &str) -> Option<&CssBlock> {
        self.blocks.iter().find(|b| b.selector == selector)
    }

    pub fn root(&self) -> Option<&CssBlock> {
        self.block(ROOT_SELECTOR)
    }

    pub fn dark(&self) -> Option<&CssBlock> {
        self.block(DARK_SELECTOR)
    }

    pub fn theme_inline(&self) -> Option<&CssBlock> {
        self.block(THEME_INLINE)
    }

    pub fn blocks(&self) -> &[CssBlock] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &CssBlock> {
        self.blocks.iter()
    }
}

/// Parses a stylesheet and collects its custom properties.
///
/// # Errors
///
/// Returns [`ThemeError::Css`] with a 1-based position for the first rule
/// that isn't well formed, e.g. a selector with no `{ ... }` block.
pub fn parse_css_variables(css: &str) -> Result<CssVariables> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = VariableRuleParser;

    let mut blocks = Vec::new();
    for result in cssparser::StyleSheetParser::new(&mut parser, &mut rules) {
        match result {
            Ok(block) => blocks.push(block),
            Err((err, _)) => {
                return Err(ThemeError::Css {
                    line: err.location.line + 1,
                    column: err.location.column,
                })
            }
        }
    }

    tracing::debug!(blocks = blocks.len(), "extracted css variables");
    Ok(CssVariables { blocks })
}

/// Consumes the rest of `input` and returns its source text.
fn remaining_text<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    input.slice_from(start).trim()
}

fn declarations<'i>(input: &mut Parser<'i, '_>) -> Vec<(String, String)> {
    let mut decl_parser = VariableDeclarationParser;
    RuleBodyParser::new(input, &mut decl_parser)
        .flatten()
        .collect()
}

struct VariableRuleParser;

impl<'i> QualifiedRuleParser<'i> for VariableRuleParser {
    type Prelude = String;
    type QualifiedRule = CssBlock;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(remaining_text(input).to_string())
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(CssBlock {
            selector,
            declarations: declarations(input),
        })
    }
}

impl<'i> AtRuleParser<'i> for VariableRuleParser {
    type Prelude = String;
    type AtRule = CssBlock;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let prelude = remaining_text(input);
        if prelude.is_empty() {
            Ok(format!("@{}", name.as_ref()))
        } else {
            Ok(format!("@{} {}", name.as_ref(), prelude))
        }
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::AtRule, ParseError<'i, Self::Error>> {
        Ok(CssBlock {
            selector,
            declarations: declarations(input),
        })
    }
}

struct VariableDeclarationParser;

impl<'i> DeclarationParser<'i> for VariableDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        if !name.starts_with("--") {
            // Drain so the body parser moves on cleanly.
            remaining_text(input);
            return Err(input.new_custom_error::<(), ()>(()));
        }
        let value = remaining_text(input).to_string();
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for VariableDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for VariableDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for VariableDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
