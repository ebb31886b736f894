//! Canonical textual encoding of structural parser types.
//!
//! The core tree models only basic and named types, so the bridge encodes
//! richer parser types as identifier-type names:
//!
//! | Parser type | Canonical text |
//! |-------------|----------------|
//! | Reference | `&'a mut int`, `&int` |
//! | Pointer | `*mut float`, `*float` |
//! | Array | `[int]`, `[int; 3]` |
//! | Generic | `Result<int, string>` |
//! | Function | `(x: int, y: *mut float) -> &'a int` |
//!
//! [`parse`] reverses the encoding for every form except function types,
//! which deliberately fall back to a basic type bearing the full text.
//! Splitting generic arguments is aware of angle-bracket depth, so nested
//! generics survive the trip.

use super::parser_ast::ParserType;
use crate::span::Span;

/// Renders a parser type in its canonical textual form.
pub fn print(ty: &ParserType) -> String {
    match ty {
        ParserType::Basic { name, .. } => name.clone(),
        ParserType::Reference {
            inner,
            lifetime,
            mutable,
            ..
        } => {
            let mut out = String::from("&");
            if !lifetime.is_empty() {
                out.push('\'');
                out.push_str(lifetime);
                out.push(' ');
            }
            if *mutable {
                out.push_str("mut ");
            }
            out.push_str(&print(inner));
            out
        }
        ParserType::Pointer { inner, mutable, .. } => {
            if *mutable {
                format!("*mut {}", print(inner))
            } else {
                format!("*{}", print(inner))
            }
        }
        ParserType::Array { element, size, .. } => match size {
            Some(size) => format!("[{}; {}]", print(element), size),
            None => format!("[{}]", print(element)),
        },
        ParserType::Generic { base, args, .. } => {
            let args: Vec<String> = args.iter().map(print).collect();
            format!("{}<{}>", base, args.join(", "))
        }
        ParserType::Function {
            params,
            return_type,
            ..
        } => {
            let params: Vec<String> = params
                .iter()
                .map(|(name, ty)| format!("{}: {}", name, print(ty)))
                .collect();
            format!("({}) -> {}", params.join(", "), print(return_type))
        }
    }
}

/// Returns true if the name is a canonical encoded form rather than a
/// plain type name.
pub fn is_encoded(name: &str) -> bool {
    let name = name.trim();
    name.starts_with('&')
        || name.starts_with('*')
        || name.starts_with('[')
        || generic_split(name).is_some()
}

/// Parses a canonical textual form back into a structural parser type.
///
/// Every reconstructed node carries `span`; the encoding does not retain
/// positions of inner types. Text matching no canonical form, function
/// types included, becomes a basic type bearing the text.
pub fn parse(text: &str, span: &Span) -> ParserType {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix('&') {
        let rest = rest.trim_start();
        let (lifetime, rest) = match rest.strip_prefix('\'') {
            Some(after_tick) => match after_tick.find(char::is_whitespace) {
                Some(end) => (after_tick[..end].to_string(), after_tick[end..].trim_start()),
                None => (after_tick.to_string(), ""),
            },
            None => (String::new(), rest),
        };
        let (mutable, rest) = strip_mut(rest);
        return ParserType::Reference {
            inner: Box::new(parse(rest, span)),
            lifetime,
            mutable,
            span: span.clone(),
        };
    }

    if let Some(rest) = text.strip_prefix('*') {
        let (mutable, rest) = strip_mut(rest.trim_start());
        return ParserType::Pointer {
            inner: Box::new(parse(rest, span)),
            mutable,
            span: span.clone(),
        };
    }

    if let Some(inner) = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let mut parts = split_top_level(inner, ';');
        let element = parts.next().unwrap_or("");
        let size = parts.next().map(|raw| raw.trim().to_string());
        return ParserType::Array {
            element: Box::new(parse(element, span)),
            size,
            span: span.clone(),
        };
    }

    if let Some((base, args_text)) = generic_split(text) {
        let args = split_top_level(args_text, ',')
            .map(|arg| parse(arg, span))
            .collect();
        return ParserType::Generic {
            base: base.to_string(),
            args,
            span: span.clone(),
        };
    }

    ParserType::Basic {
        name: text.to_string(),
        span: span.clone(),
    }
}

fn strip_mut(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix("mut ") {
        (true, rest.trim_start())
    } else if text == "mut" {
        (true, "")
    } else {
        (false, text)
    }
}

// `Base<args>` with an identifier-shaped base; anything else (function
// types in particular) is not treated as generic.
fn generic_split(text: &str) -> Option<(&str, &str)> {
    let open = text.find('<')?;
    if !text.ends_with('>') || open == 0 {
        return None;
    }
    let base = &text[..open];
    let base_is_name = base
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == ':');
    if !base_is_name {
        return None;
    }
    Some((base, &text[open + 1..text.len() - 1]))
}

// Splits at `sep` occurrences that sit outside every angle, square, and
// round bracket. The `>` of a `->` arrow does not close an angle bracket.
fn split_top_level(text: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let mut prev = '\0';
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' | '[' | '(' => depth += 1,
            '>' if prev != '-' => depth -= 1,
            ']' | ')' => depth -= 1,
            c if c == sep && depth == 0 => {
                pieces.push(&text[start..idx]);
                start = idx + sep.len_utf8();
            }
            _ => {}
        }
        prev = ch;
    }
    pieces.push(&text[start..]);
    pieces.into_iter()
}
