//! Line-oriented rewrites that keep transcripts compact.
//!
//! Two rewrites run in a single top-to-bottom pass:
//!
//! - fenced code blocks spanning more than [`MAX_CODE_BLOCK_LINES`] lines (fences
//!   included) collapse to `[code block: <label>... (<N> lines)]`
//! - lines outside a fence longer than [`MAX_LINE_CHARS`] characters that contain a
//!   code indicator become [`FILE_DUMP_PLACEHOLDER`]
//!
//! The output of [`normalize`] contains no new fence markers and no long lines, so
//! normalizing twice gives the same result as normalizing once.

pub const MAX_CODE_BLOCK_LINES: usize = 10;
pub const MAX_LINE_CHARS: usize = 500;
pub const FILE_DUMP_PLACEHOLDER: &str = "[file dump: long code output stripped]";

const FENCE: &str = "```";
const MAX_LABEL_CHARS: usize = 80;
const CODE_INDICATORS: [&str; 5] = ["def ", "class ", "import ", "function ", "{"];

/// Collapse long code blocks and strip file dumps from one message
pub fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if !is_opening_fence(line) {
            result.push(strip_file_dump(line).to_string());
            i += 1;
            continue;
        }

        // Opening fence, inner lines, and the closing fence if there is one
        let start = i;
        i += 1;
        while i < lines.len() && !is_closing_fence(lines[i]) {
            i += 1;
        }
        if i < lines.len() {
            i += 1;
        }

        let block = &lines[start..i];
        if block.len() > MAX_CODE_BLOCK_LINES {
            result.push(collapse_block(block));
        } else {
            result.extend(block.iter().map(|l| l.to_string()));
        }
    }

    result.join("\n")
}

fn is_opening_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

fn is_closing_fence(line: &str) -> bool {
    line.trim() == FENCE
}

/// Summarize a block as a single line; `block` includes the fence lines
fn collapse_block(block: &[&str]) -> String {
    let tag = block[0].trim().trim_start_matches(FENCE).trim();
    let label = if !tag.is_empty() {
        tag
    } else {
        block.get(1).map(|l| l.trim()).unwrap_or("code")
    };

    format!("[code block: {}... ({} lines)]", truncate_chars(label, MAX_LABEL_CHARS), block.len())
}

fn strip_file_dump(line: &str) -> &str {
    if line.chars().count() > MAX_LINE_CHARS
        && CODE_INDICATORS.iter().any(|indicator| line.contains(indicator))
    {
        FILE_DUMP_PLACEHOLDER
    } else {
        line
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
