/*!
# Challenge-Format I/O

Reading and writing of book embeddings in the Graph Drawing challenge text
format. The format is whitespace-delimited; `#` starts a comment that runs
to the end of the line, and blank or whitespace-only lines are skipped
everywhere. The logical sequence is:

1. the vertex count `N`,
2. the page count `P`,
3. `N` lines of vertex ids, the i-th giving the id placed at position `i`,
4. edge lines `u v [k]` until end of input, where `u` and `v` are vertex
   ids and `k` is the starting page (brackets literal); anything after the
   closing bracket is ignored.

The loader normalizes labels so that the vertex placed at position `i`
carries `id = i`; file labels are translated to positions through a
where-is-vertex table. A written embedding is therefore re-readable as
input and loads back to the same state.

All format violations are reported as [`BookbindError::Parse`] with a
description of the offending line; they are fatal to the solver binary.
*/

use std::io::{BufRead, Write};

use crate::core::error::{BookbindError, Result};
use crate::core::types::BookEmbedding;

/// Reads the next line that carries content, with comments stripped.
/// Returns `Ok(None)` at end of input.
fn next_content_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| BookbindError::Io(format!("failed to read a line: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        let content = match line.find(['#', '\r', '\n']) {
            Some(cut) => &line[..cut],
            None => line.as_str(),
        };
        if !content.trim().is_empty() {
            return Ok(Some(content.to_string()));
        }
    }
}

/// Parses the first whitespace-separated token of `line` as a number; the
/// rest of the line is ignored.
fn parse_first_number(line: &str) -> Result<i64> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| BookbindError::parse(format!("no number found in '{}'", line.trim())))?;
    token
        .parse::<i64>()
        .map_err(|_| BookbindError::parse(format!("failed to parse '{}' as a number", token)))
}

/// Reads the next content line and parses its leading number.
fn read_number<R: BufRead>(input: &mut R) -> Result<i64> {
    let line = next_content_line(input)?
        .ok_or_else(|| BookbindError::parse("unexpected end of input"))?;
    parse_first_number(&line)
}

/// Parses an edge line `u v [k]` into its raw id pair and starting page.
fn parse_edge_line(line: &str) -> Result<(usize, usize, usize)> {
    let mut tokens = line.split_whitespace();
    let bad = |what: &str| BookbindError::parse(format!("failed to parse '{}' as an edge: {}", line.trim(), what));

    let u = tokens
        .next()
        .ok_or_else(|| bad("missing first endpoint"))?
        .parse::<usize>()
        .map_err(|_| bad("first endpoint is not a number"))?;
    let v = tokens
        .next()
        .ok_or_else(|| bad("missing second endpoint"))?
        .parse::<usize>()
        .map_err(|_| bad("second endpoint is not a number"))?;

    // The page may be glued to its brackets ("[3]") or spaced ("[ 3 ]").
    let rest: String = tokens.collect::<Vec<_>>().join(" ");
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('[').ok_or_else(|| bad("missing '['"))?;
    let close = rest.find(']').ok_or_else(|| bad("missing ']'"))?;
    let page = rest[..close]
        .trim()
        .parse::<usize>()
        .map_err(|_| bad("page is not a number"))?;
    Ok((u, v, page))
}

/// Loads a book embedding from the challenge format.
pub fn read_embedding<R: BufRead>(mut input: R) -> Result<BookEmbedding> {
    let n = read_number(&mut input)?;
    if n <= 0 {
        return Err(BookbindError::parse(format!(
            "vertex count must be positive, got {}",
            n
        )));
    }
    let n = n as usize;

    let pages = read_number(&mut input)?;
    if pages <= 0 {
        return Err(BookbindError::parse(format!(
            "page count must be positive, got {}",
            pages
        )));
    }
    let pages = pages as usize;

    // The i-th ordering line names the id placed at position i.
    let mut where_is = vec![usize::MAX; n];
    for position in 0..n {
        let id = read_number(&mut input)?;
        if id < 0 || id as usize >= n {
            return Err(BookbindError::parse(format!(
                "vertex id {} out of range in the ordering",
                id
            )));
        }
        let id = id as usize;
        if where_is[id] != usize::MAX {
            return Err(BookbindError::parse(format!(
                "vertex id {} appears twice in the ordering",
                id
            )));
        }
        where_is[id] = position;
    }

    let mut graph = BookEmbedding::new(n, pages);
    while let Some(line) = next_content_line(&mut input)? {
        let (u, v, page) = parse_edge_line(&line)?;
        if u >= n || v >= n {
            return Err(BookbindError::parse(format!(
                "edge endpoint out of range in '{}'",
                line.trim()
            )));
        }
        if u == v {
            return Err(BookbindError::parse(format!(
                "self-loop in '{}'",
                line.trim()
            )));
        }
        if page >= pages {
            return Err(BookbindError::parse(format!(
                "edge page out of range in '{}'",
                line.trim()
            )));
        }
        graph.add_edge(where_is[u], where_is[v], Some(page));
    }

    tracing::debug!(
        "loaded embedding with {} vertices and {} edges on {} pages",
        graph.vertex_count(),
        graph.edge_count(),
        graph.page_count()
    );
    Ok(graph)
}

/// Writes the embedding in the challenge format. The output is re-readable
/// by [`read_embedding`].
pub fn write_embedding<W: Write>(g: &BookEmbedding, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", g.vertex_count())?;
    writeln!(out, "{}", g.page_count())?;
    for vertex in g.vertices() {
        writeln!(out, "{}", vertex.id)?;
    }
    for ed in g.edges() {
        writeln!(
            out,
            "{} {} [{}]",
            g.id_at(ed.v1),
            g.id_at(ed.v2),
            ed.page.unwrap_or_default()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_triangle() {
        let input = b"3\n1\n0\n1\n2\n0 1 [0]\n1 2 [0]\n0 2 [0]\n";
        let g = read_embedding(&input[..]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.page_count(), 1);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges()[2].v1, 0);
        assert_eq!(g.edges()[2].v2, 2);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = b"# a header\n\n4\n2 # pages\n   \n0\n1\n2\n3\n0 1 [ 1 ] trailing junk\n";
        let g = read_embedding(&input[..]).unwrap();
        assert_eq!(g.page_count(), 2);
        assert_eq!(g.edges()[0].page, Some(1));
    }

    #[test]
    fn nonidentity_ordering_maps_labels_to_positions() {
        // id 2 sits at position 0, id 0 at position 1, id 1 at position 2.
        let input = b"3\n1\n2\n0\n1\n0 1 [0]\n";
        let g = read_embedding(&input[..]).unwrap();
        let ed = &g.edges()[0];
        assert_eq!((ed.v1, ed.v2), (1, 2));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(read_embedding(&b"x\n"[..]).is_err());
        assert!(read_embedding(&b"2\n1\n0\n1\n0 1 0\n"[..]).is_err()); // missing '['
        assert!(read_embedding(&b"2\n1\n0\n1\n0 1 [0\n"[..]).is_err()); // missing ']'
        assert!(read_embedding(&b"2\n1\n0\n0\n"[..]).is_err()); // duplicate id
        assert!(read_embedding(&b"2\n1\n0\n1\n0 0 [0]\n"[..]).is_err()); // self-loop
        assert!(read_embedding(&b"2\n1\n0\n1\n0 1 [5]\n"[..]).is_err()); // page out of range
        assert!(read_embedding(&b"3\n1\n0\n1\n"[..]).is_err()); // truncated ordering
    }

    #[test]
    fn write_then_read_round_trips() {
        let input = b"3\n2\n2\n0\n1\n0 1 [1]\n1 2 [0]\n";
        let g = read_embedding(&input[..]).unwrap();
        let mut buf = Vec::new();
        write_embedding(&g, &mut buf).unwrap();
        let h = read_embedding(&buf[..]).unwrap();
        assert_eq!(
            g.vertices().iter().map(|v| v.id).collect::<Vec<_>>(),
            h.vertices().iter().map(|v| v.id).collect::<Vec<_>>()
        );
        assert_eq!(g.edges(), h.edges());
    }
}
