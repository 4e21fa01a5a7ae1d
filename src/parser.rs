use std::fs;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use url::Url;

use crate::classifier::classify;
use crate::types::Member;

/// Column positions discovered from the header row. `None` means the
/// export has no such column and every row reads as empty there.
struct HeaderIndex {
    name: Option<usize>,
    image: Option<usize>,
    linked_in: Option<usize>,
    email: Option<usize>,
    role: Option<usize>,
}

impl HeaderIndex {
    fn locate(headers: &[String]) -> Self {
        Self {
            name: find_column(headers, &["name"]),
            image: find_column(headers, &["image", "photograph"]),
            linked_in: find_column(headers, &["linkedin"]),
            email: find_column(headers, &["email", "gmail"]),
            role: find_column(headers, &["role", "post"]),
        }
    }
}

/// First header containing one of the keywords wins.
fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| keywords.iter().any(|k| h.contains(k)))
}

/// Fetch the roster export and parse it, the whole page-load operation
/// in one call. Any failure to obtain the text is logged and yields an
/// empty roster; the caller only ever sees data or an empty state.
pub fn load_members(source: &str) -> Vec<Member> {
    let csv_text = match fetch_source(source) {
        Ok(text) => text,
        Err(e) => {
            error!("Could not load roster from '{}': {:#}", source, e);
            return Vec::new();
        }
    };

    let members = parse_members(&csv_text);
    if members.is_empty() {
        warn!("No members found in {}", source);
    } else {
        info!("Parsed {} members from {}", members.len(), source);
    }
    members
}

fn fetch_source(source: &str) -> Result<String> {
    if source.starts_with("http") {
        info!("Downloading roster from URL: {}", source);
        reqwest::blocking::get(source)
            .and_then(|r| r.text())
            .with_context(|| format!("request to {} failed", source))
    } else {
        info!("Reading roster file: {}", source);
        fs::read_to_string(source).with_context(|| format!("could not read {}", source))
    }
}

/// Parse the spreadsheet export into members, in row order.
///
/// Best-effort by design: rows without a usable name are dropped,
/// invalid optional fields are cleared, and a header-only export yields
/// an empty list. This function has no error path.
pub fn parse_members(csv_text: &str) -> Vec<Member> {
    let mut lines = csv_text.lines();

    let header_line = match lines.next() {
        Some(line) => line.replace('\u{feff}', ""),
        None => return Vec::new(),
    };

    let headers: Vec<String> = tokenize_line(&header_line)
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let columns = HeaderIndex::locate(&headers);

    let mut members = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = tokenize_line(line);

        let name = collapse_whitespace(field_at(&values, columns.name));
        if name.is_empty() {
            continue;
        }

        let role = collapse_whitespace(field_at(&values, columns.role));
        let role = if role.is_empty() {
            "Member".to_string()
        } else {
            role
        };

        // LinkedIn only gets a cheap prefix check; images get the full
        // URL validation.
        let linked_in = some_if(field_at(&values, columns.linked_in).trim(), |v| {
            v.starts_with("http")
        });
        let profile_image = some_if(field_at(&values, columns.image).trim(), |v| {
            is_valid_image_url(v)
        });
        let email = some_if(field_at(&values, columns.email).trim(), |v| v.contains('@'));

        let category = classify(&role, &name);

        members.push(Member {
            name,
            role,
            linked_in,
            profile_image,
            email,
            category,
        });
    }

    members
}

/// Split one CSV line into raw fields. A `"`-wrapped field may contain
/// commas, and `""` inside quotes is a literal quote. An unmatched
/// quote just toggles the in-quotes flag, so pathological input
/// degrades instead of erroring.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// True iff the value parses as an absolute http/https URL.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Image URLs additionally reject inline `data:image` URIs and Google
/// Drive links.
pub fn is_valid_image_url(value: &str) -> bool {
    if value.is_empty() || value.starts_with("data:image") || value.contains("drive.google.com") {
        return false;
    }
    is_valid_url(value)
}

fn field_at<'a>(values: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| values.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Collapse runs of whitespace (embedded newlines included) to single
/// spaces and trim the ends.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn some_if(value: &str, keep: impl Fn(&str) -> bool) -> Option<String> {
    if !value.is_empty() && keep(value) {
        Some(value.to_string())
    } else {
        None
    }
}
