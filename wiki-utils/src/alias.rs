use std::collections::HashMap;

use regex::Regex;

/// Ordered alias → category table.
///
/// Iteration order is insertion order. Re-inserting an alias overwrites its
/// category but keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: impl Into<String>, category: impl Into<String>) {
        let alias = alias.into();
        let category = category.into();

        match self.index.get(&alias) {
            Some(&position) => self.entries[position].1 = category,
            None => {
                self.index.insert(alias.clone(), self.entries.len());
                self.entries.push((alias, category));
            }
        }
    }

    /// Exact lookup of a single alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.index
            .get(alias)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, category)| (alias.as_str(), category.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A, C> FromIterator<(A, C)> for AliasTable
where
    A: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, category) in iter {
            table.insert(alias, category);
        }
        table
    }
}

/// Which resolution pass produced a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchPass {
    /// A whitespace token, trimmed of ASCII punctuation, equals an alias.
    Token,
    /// An alias occurs somewhere in the text between word boundaries.
    WordBoundary,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AliasMatch<'a> {
    pub alias: &'a str,
    pub category: &'a str,
    pub pass: MatchPass,
}

/// Detects which known game a free-text message refers to.
#[derive(Clone, Debug)]
pub struct AliasResolver {
    table: AliasTable,
    /// One `\b<alias>\b` pattern per table entry, in table order.
    patterns: Vec<Regex>,
}

impl AliasResolver {
    pub fn new(table: AliasTable) -> Result<Self, regex::Error> {
        let patterns = table
            .iter()
            .map(|(alias, _)| Regex::new(&format!(r"\b{}\b", regex::escape(alias))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { table, patterns })
    }

    /// Resolve `text` to a category, if any known alias is present.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        self.resolve_match(text).map(|found| found.category)
    }

    /// Resolve `text` and report which alias and pass matched.
    ///
    /// Token matches always win over word-boundary matches, even when the
    /// word-boundary alias appears earlier in the text.
    pub fn resolve_match(&self, text: &str) -> Option<AliasMatch<'_>> {
        let content = text.to_lowercase();
        self.match_token(&content)
            .or_else(|| self.match_word_boundary(&content))
    }

    fn match_token(&self, content: &str) -> Option<AliasMatch<'_>> {
        content
            .split_whitespace()
            .map(strip_punctuation)
            .find_map(|token| {
                let position = *self.table.index.get(token)?;
                let (alias, category) = &self.table.entries[position];
                Some(AliasMatch {
                    alias: alias.as_str(),
                    category: category.as_str(),
                    pass: MatchPass::Token,
                })
            })
    }

    fn match_word_boundary(&self, content: &str) -> Option<AliasMatch<'_>> {
        self.table
            .entries
            .iter()
            .zip(&self.patterns)
            .find(|(_, pattern)| pattern.is_match(content))
            .map(|((alias, category), _)| AliasMatch {
                alias: alias.as_str(),
                category: category.as_str(),
                pass: MatchPass::WordBoundary,
            })
    }
}

/// Trim leading and trailing ASCII punctuation; inner punctuation is kept.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}
