use crate::document::Document;
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// How invalid byte sequences are recovered while reading a page.
///
/// Recovery is always local and silent; a bad byte garbles its own line and
/// nothing else. Counting passes are byte-oriented and never decode at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Substitute each invalid sequence with U+FFFD.
    #[default]
    Replace,
    /// Drop invalid bytes entirely.
    Skip,
}

impl DecodePolicy {
    fn decode(&self, bytes: &[u8]) -> String {
        match self {
            DecodePolicy::Replace => String::from_utf8_lossy(bytes).into_owned(),
            DecodePolicy::Skip => {
                let mut out = String::with_capacity(bytes.len());
                let mut rest = bytes;
                loop {
                    match std::str::from_utf8(rest) {
                        Ok(valid) => {
                            out.push_str(valid);
                            break;
                        }
                        Err(err) => {
                            let (valid, after) = rest.split_at(err.valid_up_to());
                            out.push_str(std::str::from_utf8(valid).unwrap_or(""));
                            match err.error_len() {
                                Some(len) => rest = &after[len..],
                                // Truncated sequence at the end of the line.
                                None => break,
                            }
                        }
                    }
                }
                out
            }
        }
    }
}

/// Converts a raw file into page-addressable line ranges without holding
/// the file in memory. There is no line index: each request re-scans from
/// the start of the file, trading repeated skip cost for bounded memory.
/// Acceptable because navigation is page-at-a-time and interactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pager {
    policy: DecodePolicy,
}

impl Pager {
    pub fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// One full sequential pass counting line terminators. An unterminated
    /// trailing line counts as a line. Nothing is retained between chunks;
    /// this is the dominant cost for very large files.
    pub fn count_lines(&self, document: &Document) -> Result<u64> {
        let file = File::open(document.path())?;
        let mut reader = BufReader::new(file);
        let mut count = 0u64;
        let mut last_byte = b'\n';
        loop {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            count += chunk.iter().filter(|&&byte| byte == b'\n').count() as u64;
            last_byte = chunk[chunk.len() - 1];
            let consumed = chunk.len();
            reader.consume(consumed);
        }
        if last_byte != b'\n' {
            count += 1;
        }
        Ok(count)
    }

    /// ceil(line_count / page_size), never fewer than one page, so page 0 is
    /// always a valid request even for an empty file.
    pub fn page_count(&self, line_count: u64, page_size: usize) -> u64 {
        line_count.div_ceil((page_size as u64).max(1)).max(1)
    }

    /// Second sequential pass: skip `page_index * page_size` lines without
    /// keeping them, then collect up to `page_size` lines, each with its
    /// terminator if present. Stops early at end of file; a request past the
    /// end yields an empty page rather than an error.
    pub fn read_page(
        &self,
        document: &Document,
        page_index: u64,
        page_size: usize,
    ) -> Result<Vec<String>> {
        let file = File::open(document.path())?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        let skip = page_index * page_size as u64;
        for _ in 0..skip {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(Vec::new());
            }
        }

        let mut lines = Vec::with_capacity(page_size);
        for _ in 0..page_size {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines.push(self.policy.decode(&buf));
        }
        Ok(lines)
    }
}
