//! Marks, the selected square and move arrows
//!
//! Tokens are parsed one at a time into `Result<_, MalformedAnnotation>`; an
//! [`AnnotationSet`] keeps the good ones and remembers the rejects so the
//! renderer can report them.

use std::fmt;

use pest::Parser;

use crate::errors::{AnnotationKind, MalformedAnnotation};
use crate::types::{Color, SquareId};
use crate::{BoardParser, Rule};

/// One move arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowDescriptor {
    pub from: SquareId,
    pub to: SquareId,
    /// Falls back to the palette arrow color
    pub color: Option<Color>,
    /// Requests the L-shaped knight arrow
    pub knight: bool,
}

impl ArrowDescriptor {
    pub fn new(from: SquareId, to: SquareId) -> Self {
        Self {
            from,
            to,
            color: None,
            knight: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn knight(mut self) -> Self {
        self.knight = true;
        self
    }

    /// Reject arrows that cannot be drawn.
    pub fn check(self) -> Result<Self, MalformedAnnotation> {
        if self.from == self.to {
            return Err(MalformedAnnotation::new(
                AnnotationKind::Arrow,
                self.to_string(),
                "arrow starts and ends on the same square",
            ));
        }
        Ok(self)
    }
}

impl fmt::Display for ArrowDescriptor {
    /// The token form, e.g. `g1f3ff000080k`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(color) = self.color {
            write!(f, "{}", color.to_string().trim_start_matches('#'))?;
        }
        if self.knight {
            write!(f, "k")?;
        }
        Ok(())
    }
}

/// Parse `<from><to>[color][k]`, e.g. `e2e4`, `g1f3k`, `d1h5ff000080`.
pub fn parse_arrow(token: &str) -> Result<ArrowDescriptor, MalformedAnnotation> {
    let malformed = |reason: String| MalformedAnnotation::new(AnnotationKind::Arrow, token, reason);

    let pairs = BoardParser::parse(Rule::arrow, token).map_err(|e| malformed(e.variant.message().into_owned()))?;

    let mut squares = Vec::with_capacity(2);
    let mut color = None;
    let mut knight = false;
    for pair in pairs.flat_map(|p| p.into_inner()) {
        match pair.as_rule() {
            Rule::square => {
                let sq = pair.as_str().parse::<SquareId>().map_err(|e| malformed(e.to_string()))?;
                squares.push(sq);
            }
            Rule::hex_color => {
                color = Some(pair.as_str().parse::<Color>().map_err(|e| malformed(e.to_string()))?);
            }
            Rule::knight_flag => knight = true,
            _ => {}
        }
    }

    let [from, to] = squares[..] else {
        return Err(malformed("expected two squares".to_string()));
    };

    ArrowDescriptor { from, to, color, knight }
        .check()
        .map_err(|e| malformed(e.reason))
}

/// Parse a single square name used as a mark or selection.
pub fn parse_square(kind: AnnotationKind, token: &str) -> Result<SquareId, MalformedAnnotation> {
    BoardParser::parse(Rule::mark, token)
        .map_err(|e| MalformedAnnotation::new(kind, token, e.variant.message().into_owned()))?;
    token
        .parse::<SquareId>()
        .map_err(|e| MalformedAnnotation::new(kind, token, e.to_string()))
}

/// Split a comma separated list, dropping blanks.
fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Everything drawn on top of the bare position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    pub marks: Vec<SquareId>,
    pub arrows: Vec<ArrowDescriptor>,
    pub selected: Option<SquareId>,
    /// Tokens that did not parse, in input order
    pub rejected: Vec<MalformedAnnotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from comma separated mark and arrow lists plus an optional selection.
    pub fn from_tokens(marks: &str, arrows: &str, selected: Option<&str>) -> Self {
        let mut set = Self::new();
        for token in tokens(marks) {
            set.push_mark(parse_square(AnnotationKind::Mark, token));
        }
        for token in tokens(arrows) {
            set.push_arrow(parse_arrow(token));
        }
        if let Some(token) = selected.map(str::trim).filter(|t| !t.is_empty()) {
            match parse_square(AnnotationKind::Selected, token) {
                Ok(sq) => set.selected = Some(sq),
                Err(e) => set.reject(e),
            }
        }
        set
    }

    pub fn push_mark(&mut self, mark: Result<SquareId, MalformedAnnotation>) {
        match mark {
            Ok(sq) if !self.marks.contains(&sq) => self.marks.push(sq),
            Ok(_) => {}
            Err(e) => self.reject(e),
        }
    }

    pub fn push_arrow(&mut self, arrow: Result<ArrowDescriptor, MalformedAnnotation>) {
        match arrow.and_then(ArrowDescriptor::check) {
            Ok(arrow) => self.arrows.push(arrow),
            Err(e) => self.reject(e),
        }
    }

    pub fn with_mark(mut self, sq: SquareId) -> Self {
        self.push_mark(Ok(sq));
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowDescriptor) -> Self {
        self.push_arrow(Ok(arrow));
        self
    }

    pub fn with_selected(mut self, sq: SquareId) -> Self {
        self.selected = Some(sq);
        self
    }

    pub fn is_marked(&self, sq: SquareId) -> bool {
        self.marks.contains(&sq)
    }

    fn reject(&mut self, error: MalformedAnnotation) {
        crate::log::warn!(kind = %error.kind, token = %error.token, reason = %error.reason, "skipping annotation");
        self.rejected.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> SquareId {
        name.parse().unwrap()
    }

    #[test]
    fn plain_arrow() {
        let arrow = parse_arrow("e2e4").unwrap();
        assert_eq!(arrow, ArrowDescriptor::new(sq("e2"), sq("e4")));
    }

    #[test]
    fn arrow_with_color_and_knight_flag() {
        let arrow = parse_arrow("g1f3ff000080k").unwrap();
        assert_eq!(arrow.from, sq("g1"));
        assert_eq!(arrow.to, sq("f3"));
        assert_eq!(arrow.color, Some(Color::rgba(0xff, 0, 0, 0x80)));
        assert!(arrow.knight);
    }

    #[test]
    fn knight_flag_without_color() {
        let arrow = parse_arrow("b8c6k").unwrap();
        assert!(arrow.knight);
        assert_eq!(arrow.color, None);
    }

    #[test]
    fn malformed_arrows_say_why() {
        for token in ["e2", "e2e9", "z1e4", "e2e4xyz", "e2e2"] {
            let err = parse_arrow(token).unwrap_err();
            assert_eq!(err.kind, AnnotationKind::Arrow);
            assert_eq!(err.token, token);
            assert!(!err.reason.is_empty());
        }
    }

    #[test]
    fn same_square_arrow_is_rejected_by_every_entry_point() {
        let err = parse_arrow("e2e2k").unwrap_err();
        assert_eq!(err.token, "e2e2k");

        let set = AnnotationSet::new()
            .with_arrow(ArrowDescriptor::new(sq("e2"), sq("e2")))
            .with_arrow(ArrowDescriptor::new(sq("e2"), sq("e4")));
        assert_eq!(set.arrows, vec![ArrowDescriptor::new(sq("e2"), sq("e4"))]);
        assert_eq!(set.rejected.len(), 1);
        assert_eq!(set.rejected[0].token, "e2e2");
        assert_eq!(set.rejected[0].kind, AnnotationKind::Arrow);
    }

    #[test]
    fn descriptor_displays_as_its_token() {
        for token in ["e2e4", "g1f3k", "d1h5ff000080", "b8c6aaa23bk"] {
            assert_eq!(parse_arrow(token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn one_good_one_bad_arrow() {
        let set = AnnotationSet::from_tokens("", "e2e4,e2e9", None);
        assert_eq!(set.arrows.len(), 1);
        assert_eq!(set.rejected.len(), 1);
        assert_eq!(set.rejected[0].token, "e2e9");
    }

    #[test]
    fn marks_skip_blanks_and_duplicates() {
        let set = AnnotationSet::from_tokens(" e4, ,e4,d5,", "", None);
        assert_eq!(set.marks, vec![sq("e4"), sq("d5")]);
        assert!(set.rejected.is_empty());
    }

    #[test]
    fn bad_mark_and_selection_are_rejected() {
        let set = AnnotationSet::from_tokens("e4,k9", "", Some("x0"));
        assert_eq!(set.marks, vec![sq("e4")]);
        assert_eq!(set.selected, None);
        let kinds: Vec<_> = set.rejected.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![AnnotationKind::Mark, AnnotationKind::Selected]);
    }

    #[test]
    fn selection_is_parsed() {
        let set = AnnotationSet::from_tokens("", "", Some("e2"));
        assert_eq!(set.selected, Some(sq("e2")));
    }

    #[test]
    fn builder_methods() {
        let set = AnnotationSet::new()
            .with_mark(sq("a1"))
            .with_mark(sq("a1"))
            .with_arrow(ArrowDescriptor::new(sq("g1"), sq("f3")).knight())
            .with_selected(sq("h8"));
        assert_eq!(set.marks.len(), 1);
        assert!(set.is_marked(sq("a1")));
        assert!(set.arrows[0].knight);
        assert_eq!(set.selected, Some(sq("h8")));
    }
}
