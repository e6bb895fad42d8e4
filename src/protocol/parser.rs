//! Request-line and edge-list parsing.

use std::io::BufRead;

use crate::error::ProtocolError;
use crate::graph::Graph;
use crate::registry;
use crate::rng::generate_random_graph;

/// Header line length ceiling, enforced before any further allocation —
/// bounds an otherwise-unbounded allocation on adversarial input; does not
/// change behavior for any in-range request.
pub const MAX_HEADER_LEN: usize = 256;

/// Vertex count ceiling, same rationale.
pub const MAX_VERTICES: usize = 4096;

/// `2^32`, as a `u64`, for the `SEED` range check.
const SEED_CEIL: u64 = 1u64 << 32;

fn parse_usize(tok: &str, field: &str) -> Result<usize, ProtocolError> {
    tok.parse::<usize>()
        .map_err(|_| ProtocolError::Usage(format!("{} must be a non-negative integer", field)))
}

fn parse_u64(tok: &str, field: &str) -> Result<u64, ProtocolError> {
    tok.parse::<u64>()
        .map_err(|_| ProtocolError::Usage(format!("{} must be a non-negative integer", field)))
}

fn read_line_bounded(reader: &mut impl BufRead, buf: &mut String) -> Result<bool, ProtocolError> {
    buf.clear();
    let n = reader
        .read_line(buf)
        .map_err(|e| ProtocolError::Usage(format!("connection read failed: {}", e)))?;
    if n == 0 {
        return Ok(false); // EOF
    }
    if buf.len() > MAX_HEADER_LEN {
        return Err(ProtocolError::Usage("line too long".into()));
    }
    Ok(true)
}

fn check_vertex_count(v: usize) -> Result<(), ProtocolError> {
    if v < 1 {
        return Err(ProtocolError::Range("V >= 1".into()));
    }
    if v > MAX_VERTICES {
        return Err(ProtocolError::Range(format!(
            "V too large (max={})",
            MAX_VERTICES
        )));
    }
    Ok(())
}

fn check_edge_count(e: usize, v: usize) -> Result<(), ProtocolError> {
    let max_e = v * (v.saturating_sub(1)) / 2;
    if e > max_e {
        return Err(ProtocolError::Range(format!(
            "E <= V*(V-1)/2 (max={})",
            max_e
        )));
    }
    Ok(())
}

/// Parse one edge line (`u v` or `u v w`), validating against `v_count`.
/// Malformed syntax is a hard parse error; a duplicate edge is accepted by
/// the parser but silently dropped by `Graph::add_edge` without bumping
/// the expected remaining-lines count.
fn parse_edge_line(line: &str, v_count: usize, graph: &mut Graph) -> Result<(), ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 && tokens.len() != 3 {
        return Err(ProtocolError::EdgeLine("malformed edge line".into()));
    }
    let u: usize = tokens[0]
        .parse()
        .map_err(|_| ProtocolError::EdgeLine("malformed edge line".into()))?;
    let v: usize = tokens[1]
        .parse()
        .map_err(|_| ProtocolError::EdgeLine("malformed edge line".into()))?;
    let w: u64 = match tokens.get(2) {
        Some(tok) => tok
            .parse()
            .map_err(|_| ProtocolError::EdgeLine("malformed edge line".into()))?,
        None => 1,
    };

    if u >= v_count || v >= v_count {
        return Err(ProtocolError::EdgeLine("edge endpoints".into()));
    }
    if u == v {
        return Err(ProtocolError::EdgeLine("self-loop edges are not allowed".into()));
    }
    if w == 0 {
        return Err(ProtocolError::EdgeLine("weight must be positive".into()));
    }

    // Duplicate: `add_edge` returns `false`. Silently ignored — it still
    // counted as one of the `E` lines we were told to expect.
    graph.add_edge(u, v, w);
    Ok(())
}

/// Parsed request header, before the graph itself is built.
pub struct ParsedRequest {
    pub algorithm: &'static str,
    pub want_print: bool,
    pub graph: Graph,
}

/// Parse one request off `reader`: the header line and, in explicit mode,
/// the `E` edge lines that follow it.
pub fn parse_request(reader: &mut impl BufRead) -> Result<ParsedRequest, ProtocolError> {
    let mut line = String::new();
    if !read_line_bounded(reader, &mut line)? {
        return Err(ProtocolError::Usage("connection closed before a request was sent".into()));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ProtocolError::Usage("empty header line".into()));
    }

    let algo = registry::lookup(tokens[0])
        .ok_or_else(|| ProtocolError::UnknownAlgorithm(tokens[0].to_string()))?;

    let explicit = tokens.get(1) == Some(&"GRAPH");
    let (e_tok, v_tok, seed_tok, flag_idx) = if explicit {
        if tokens.len() != 4 && tokens.len() != 5 {
            return Err(ProtocolError::Usage(
                "expected '<ALGO> GRAPH <E> <V> [-p]'".into(),
            ));
        }
        (tokens[2], tokens[3], None, 4)
    } else {
        if tokens.len() != 4 && tokens.len() != 5 {
            return Err(ProtocolError::Usage(
                "expected '<ALGO> <E> <V> <SEED> [-p]'".into(),
            ));
        }
        (tokens[1], tokens[2], Some(tokens[3]), 4)
    };

    if let Some(flag) = tokens.get(flag_idx) {
        if *flag != "-p" {
            return Err(ProtocolError::Usage(format!("unrecognized flag {:?}", flag)));
        }
    }
    let want_print = tokens.get(flag_idx) == Some(&"-p");

    let e = parse_usize(e_tok, "E")?;
    let v = parse_usize(v_tok, "V")?;
    check_vertex_count(v)?;
    check_edge_count(e, v)?;

    let graph = if explicit {
        let mut graph = Graph::new(v);
        let mut edge_line = String::new();
        for _ in 0..e {
            if !read_line_bounded(reader, &mut edge_line)? {
                return Err(ProtocolError::EdgeLine(
                    "unexpected end of input: fewer edge lines than announced".into(),
                ));
            }
            parse_edge_line(&edge_line, v, &mut graph)?;
        }
        graph
    } else {
        let seed_tok = seed_tok.expect("random mode always has a SEED token");
        let seed = parse_u64(seed_tok, "SEED")?;
        if seed >= SEED_CEIL {
            return Err(ProtocolError::Range("SEED must be in [0, 2^32)".into()));
        }
        generate_random_graph(v, e, seed)
    };

    Ok(ParsedRequest {
        algorithm: algo.name(),
        want_print,
        graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<ParsedRequest, ProtocolError> {
        let mut cursor = Cursor::new(input.as_bytes());
        parse_request(&mut cursor)
    }

    #[test]
    fn explicit_mode_happy_path() {
        let parsed = parse("MST GRAPH 3 3\n0 1 1\n1 2 2\n2 0 3\n").unwrap();
        assert_eq!(parsed.algorithm, "MST");
        assert!(!parsed.want_print);
        assert_eq!(parsed.graph.order(), 3);
        assert_eq!(parsed.graph.edge_count(), 3);
    }

    #[test]
    fn explicit_mode_with_print_flag() {
        let parsed = parse("MST GRAPH 1 2 -p\n0 1\n").unwrap();
        assert!(parsed.want_print);
        assert_eq!(parsed.graph.weight(0, 1), 1, "default weight is 1");
    }

    #[test]
    fn duplicate_edge_does_not_consume_extra_line() {
        let parsed = parse("EULER GRAPH 2 3\n0 1\n0 1\n").unwrap();
        assert_eq!(parsed.graph.edge_count(), 1);
    }

    #[test]
    fn random_mode_is_deterministic() {
        let a = parse("MST 4 5 1234\n").unwrap();
        let b = parse("MST 4 5 1234\n").unwrap();
        for u in 0..5 {
            for v in 0..5 {
                assert_eq!(a.graph.has_edge(u, v), b.graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert_eq!(
            parse("BOGUS 1 2 0\n"),
            Err(ProtocolError::UnknownAlgorithm("BOGUS".to_string()))
        );
    }

    #[test]
    fn edge_count_over_max_is_rejected() {
        let err = parse("MST 10 3 0\n").unwrap_err();
        assert!(matches!(err, ProtocolError::Range(_)));
    }

    #[test]
    fn vertex_count_zero_is_rejected() {
        let err = parse("MST 0 0 0\n").unwrap_err();
        assert!(matches!(err, ProtocolError::Range(_)));
    }

    #[test]
    fn self_loop_edge_line_is_an_error() {
        let err = parse("EULER GRAPH 1 3\n0 0\n").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::EdgeLine("self-loop edges are not allowed".to_string())
        );
    }

    #[test]
    fn out_of_range_endpoint_is_an_error() {
        let err = parse("EULER GRAPH 1 3\n0 9\n").unwrap_err();
        assert_eq!(err, ProtocolError::EdgeLine("edge endpoints".to_string()));
    }

    #[test]
    fn non_positive_weight_is_an_error() {
        let err = parse("EULER GRAPH 1 3\n0 1 0\n").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::EdgeLine("weight must be positive".to_string())
        );
    }

    #[test]
    fn short_edge_input_is_an_error() {
        let err = parse("EULER GRAPH 2 3\n0 1\n").unwrap_err();
        assert!(matches!(err, ProtocolError::EdgeLine(_)));
    }
}
