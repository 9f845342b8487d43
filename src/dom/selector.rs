//! Compound CSS selector subset for the in-memory document.
//!
//! Supports comma-separated groups of `tag`, `*`, `#id`, `.class`,
//! `[attr]` and `[attr="value"]`. Combinators and pseudo-classes are
//! rejected; every selector this crate queries stays inside the subset.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector syntax at '{0}'")]
    Unsupported(String),
    #[error("unterminated attribute selector")]
    Unterminated,
}

/// Element view the matcher needs.
pub(crate) trait Matchable {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attr(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, el: &impl Matchable) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.value, el.attr(&a.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(want), Some(have)) => want == have,
        })
    }
}

/// Parsed selector group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Compound>,
}

impl Selector {
    /// Parse `input`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] for empty groups or syntax outside the subset.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let groups = input
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { groups })
    }

    pub(crate) fn matches(&self, el: &impl Matchable) -> bool {
        self.groups.iter().any(|g| g.matches(el))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn unsupported(chars: &[char], at: usize) -> SelectorError {
    SelectorError::Unsupported(chars[at..].iter().collect())
}

fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    if input.is_empty() {
        return Err(SelectorError::Empty);
    }
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars[0] == '*' {
        pos = 1;
    } else if is_ident_char(chars[0]) {
        compound.tag = Some(take_ident(&chars, &mut pos));
    }

    while pos < chars.len() {
        let at = pos;
        match chars[pos] {
            '.' => {
                pos += 1;
                let class = take_ident(&chars, &mut pos);
                if class.is_empty() {
                    return Err(unsupported(&chars, at));
                }
                compound.classes.push(class);
            }
            '#' => {
                pos += 1;
                let id = take_ident(&chars, &mut pos);
                if id.is_empty() {
                    return Err(unsupported(&chars, at));
                }
                compound.id = Some(id);
            }
            '[' => {
                let close = chars[pos..].iter().position(|&c| c == ']').ok_or(SelectorError::Unterminated)?;
                let body: String = chars[pos + 1..pos + close].iter().collect();
                compound.attrs.push(parse_attr(&body).ok_or_else(|| unsupported(&chars, at))?);
                pos += close + 1;
            }
            _ => return Err(unsupported(&chars, at)),
        }
    }
    Ok(compound)
}

fn parse_attr(body: &str) -> Option<AttrMatch> {
    let (name, value) = match body.split_once('=') {
        Some((name, raw)) => {
            let raw = raw.trim();
            let unquoted = raw
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .or_else(|| raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')))
                .unwrap_or(raw);
            (name.trim(), Some(unquoted.to_owned()))
        }
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(AttrMatch { name: name.to_owned(), value })
}
