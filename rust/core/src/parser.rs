// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ line classifier using nom
//!
//! Zero-copy classification of one trimmed line into a [`Directive`].
//! Patterns are tried in a fixed order and the first match wins; a line that
//! matches nothing is [`Directive::Unrecognized`], which is not an error.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt, recognize, rest},
    multi::fold_many0,
    sequence::{pair, preceded, tuple},
    IResult,
};
use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

/// Slash layout shared by every reference of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceShape {
    /// `f 1 2 3`
    Position,
    /// `f 1/1 2/2 3/3`
    PositionUv,
    /// `f 1/1/1 2/2/2 3/3/3`
    PositionUvNormal,
    /// `f 1//1 2//2 3//3`
    PositionNormal,
}

/// One vertex reference of a face, still in textual form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertexRef<'a> {
    pub position: &'a str,
    pub uv: Option<&'a str>,
    pub normal: Option<&'a str>,
}

/// Vertex references of a triangle or quad
pub type FaceRefs<'a> = SmallVec<[FaceVertexRef<'a>; 4]>;

/// A classified face line
#[derive(Debug, Clone, PartialEq)]
pub struct Face<'a> {
    pub shape: FaceShape,
    /// Three or four references
    pub vertices: FaceRefs<'a>,
    /// References of the same shape after the fourth (not assembled)
    pub trailing: usize,
}

/// Classified OBJ line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    /// Blank line or `# ...`
    Comment,
    /// `v x y z`
    Vertex([&'a str; 3]),
    /// `vn x y z`
    Normal([&'a str; 3]),
    /// `vt u v`
    TexCoord([&'a str; 2]),
    /// `f ...` in any of the four shapes
    Face(Face<'a>),
    /// `o name`
    Object(&'a str),
    /// `g name`
    Group(&'a str),
    /// `usemtl name`
    UseMaterial(&'a str),
    /// `mtllib name`
    MaterialLibrary(&'a str),
    /// `s value`, value may be empty
    Smoothing(&'a str),
    /// Anything else, carrying the leading keyword
    Unrecognized(&'a str),
}

impl<'a> Directive<'a> {
    /// Leading keyword of the directive, `#` for comments
    pub fn keyword(&self) -> &'a str {
        match self {
            Directive::Comment => "#",
            Directive::Vertex(_) => "v",
            Directive::Normal(_) => "vn",
            Directive::TexCoord(_) => "vt",
            Directive::Face(_) => "f",
            Directive::Object(_) => "o",
            Directive::Group(_) => "g",
            Directive::UseMaterial(_) => "usemtl",
            Directive::MaterialLibrary(_) => "mtllib",
            Directive::Smoothing(_) => "s",
            Directive::Unrecognized(keyword) => *keyword,
        }
    }
}

type VertexParser = for<'x> fn(&'x str) -> IResult<&'x str, FaceVertexRef<'x>>;

/// Face shapes in matching order
const FACE_PATTERNS: [(FaceShape, VertexParser); 4] = [
    (FaceShape::Position, plain_vertex),
    (FaceShape::PositionUv, uv_vertex),
    (FaceShape::PositionUvNormal, full_vertex),
    (FaceShape::PositionNormal, normal_vertex),
];

/// Whitespace separator (at least one)
fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

/// Numeric coordinate token: `1`, `-0.5`, `1.5e-3`
/// Only the character class is checked here; conversion happens later.
fn number(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))(input)
}

/// Signed face index: `3`, `-1`
fn index(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

fn vector3<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, [&'a str; 3]> {
    map(
        preceded(
            pair(tag(keyword), ws1),
            tuple((number, preceded(ws1, number), preceded(ws1, number))),
        ),
        |(x, y, z)| [x, y, z],
    )
}

fn vector2<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, [&'a str; 2]> {
    map(
        preceded(pair(tag(keyword), ws1), pair(number, preceded(ws1, number))),
        |(u, v)| [u, v],
    )
}

/// `a`
fn plain_vertex(input: &str) -> IResult<&str, FaceVertexRef<'_>> {
    map(index, |position| FaceVertexRef {
        position,
        uv: None,
        normal: None,
    })(input)
}

/// `a/t`
fn uv_vertex(input: &str) -> IResult<&str, FaceVertexRef<'_>> {
    map(tuple((index, char('/'), index)), |(position, _, uv)| {
        FaceVertexRef {
            position,
            uv: Some(uv),
            normal: None,
        }
    })(input)
}

/// `a/t/n`
fn full_vertex(input: &str) -> IResult<&str, FaceVertexRef<'_>> {
    map(
        tuple((index, char('/'), index, char('/'), index)),
        |(position, _, uv, _, normal)| FaceVertexRef {
            position,
            uv: Some(uv),
            normal: Some(normal),
        },
    )(input)
}

/// `a//n`
fn normal_vertex(input: &str) -> IResult<&str, FaceVertexRef<'_>> {
    map(tuple((index, tag("//"), index)), |(position, _, normal)| {
        FaceVertexRef {
            position,
            uv: None,
            normal: Some(normal),
        }
    })(input)
}

/// `f` followed by 3 or 4 references of one shape
fn face(input: &str, shape: FaceShape, vertex: VertexParser) -> IResult<&str, Face<'_>> {
    let (input, _) = pair(char('f'), ws1)(input)?;
    let (input, (a, b, c)) =
        tuple((vertex, preceded(ws1, vertex), preceded(ws1, vertex)))(input)?;
    let (input, d) = opt(preceded(ws1, vertex))(input)?;
    let (input, trailing) = fold_many0(preceded(ws1, vertex), || 0, |count, _| count + 1)(input)?;

    let mut vertices: FaceRefs = smallvec![a, b, c];
    vertices.extend(d);

    Ok((
        input,
        Face {
            shape,
            vertices,
            trailing,
        },
    ))
}

/// `keyword rest-of-line`, argument trimmed
fn statement<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    map(preceded(tag(keyword), rest), str::trim)
}

/// `s value` or a bare `s`
fn smoothing(input: &str) -> IResult<&str, &str> {
    alt((statement("s "), map(all_consuming(tag("s")), |_| "")))(input)
}

/// Classify one trimmed line
pub fn classify(line: &str) -> Directive<'_> {
    if line.is_empty() || line.starts_with('#') {
        return Directive::Comment;
    }

    if let Ok((_, v)) = vector3("v")(line) {
        return Directive::Vertex(v);
    }
    if let Ok((_, n)) = vector3("vn")(line) {
        return Directive::Normal(n);
    }
    if let Ok((_, t)) = vector2("vt")(line) {
        return Directive::TexCoord(t);
    }

    for (shape, vertex) in FACE_PATTERNS {
        if let Ok((_, f)) = face(line, shape, vertex) {
            return Directive::Face(f);
        }
    }

    if let Ok((_, name)) = statement("o ")(line) {
        return Directive::Object(name);
    }
    if let Ok((_, name)) = statement("g ")(line) {
        return Directive::Group(name);
    }
    if let Ok((_, name)) = statement("usemtl ")(line) {
        return Directive::UseMaterial(name);
    }
    if let Ok((_, name)) = statement("mtllib ")(line) {
        return Directive::MaterialLibrary(name);
    }
    if let Ok((_, value)) = smoothing(line) {
        return Directive::Smoothing(value);
    }

    Directive::Unrecognized(line.split(char::is_whitespace).next().unwrap_or(line))
}

/// Line scanner over a whole OBJ text
///
/// Splits on `\n` only and trims each line, which also drops a trailing `\r`.
/// Line numbers are 1-based.
pub struct LineScanner<'a> {
    content: &'a str,
    position: usize,
    line_number: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a new scanner
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            position: 0,
            line_number: 0,
        }
    }

    /// Next (line_number, trimmed_line)
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        if self.position >= self.content.len() {
            return None;
        }

        let remaining = &self.content[self.position..];
        let end = memchr::memchr(b'\n', remaining.as_bytes()).unwrap_or(remaining.len());

        self.position += end + 1;
        self.line_number += 1;

        Some((self.line_number, remaining[..end].trim()))
    }

    /// Count directives by keyword, comments excluded
    pub fn count_by_keyword(&mut self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();

        while let Some((_, line)) = self.next_line() {
            let directive = classify(line);
            if directive == Directive::Comment {
                continue;
            }
            *counts.entry(directive.keyword().to_string()).or_insert(0) += 1;
        }

        counts
    }

    /// Reset scanner to beginning
    pub fn reset(&mut self) {
        self.position = 0;
        self.line_number = 0;
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
