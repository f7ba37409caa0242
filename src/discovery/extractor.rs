//! Url extraction from a single byte stream.

use linkify::{LinkFinder, LinkKind};
use memchr::memmem;

use std::collections::HashSet;
use std::io::{self, BufRead, Read};

use crate::core::constants::limits::MAX_LINE_BYTES;

/// Extract the set of distinct url-shaped substrings from a byte stream.
///
/// The stream is read line by line. Only strings carrying a scheme are
/// matched, so bare hostnames never make it into the result. A line longer
/// than [`MAX_LINE_BYTES`] surfaces as an error instead of being silently
/// truncated.
pub fn extract_urls<R: BufRead>(mut reader: R) -> io::Result<HashSet<String>> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder.url_must_have_scheme(true);

    let scheme_prefilter = memmem::Finder::new(b"http");

    let mut urls = HashSet::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let mut limited = reader.by_ref().take((MAX_LINE_BYTES + 1) as u64);
        let read = limited.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        if buf.len() > MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {MAX_LINE_BYTES} bytes"),
            ));
        }

        // Cheap substring check before running the link finder
        if scheme_prefilter.find(&buf).is_none() {
            continue;
        }

        let line = String::from_utf8_lossy(&buf);
        for link in finder.links(&line) {
            urls.insert(link.as_str().to_string());
        }
    }

    Ok(urls)
}
