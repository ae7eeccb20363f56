//! Reversing parser
//!
//! Parses the body of a bracketed list and reverses element order in the same
//! pass: every element is prepended to its level's accumulator, so each level
//! comes out in reverse encounter order. There is no tokenizer; each
//! non-delimiter character is one leaf.
//!
//! The parser is best-effort and never fails. Unbalanced brackets simply end a
//! level early or run it to the end of the buffer.

use std::collections::VecDeque;

use crate::ast::Node;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse the contents of one list level, its own brackets already stripped.
///
/// # Examples
///
/// ```rust
/// use revnest::ast::Node;
/// use revnest::syntax::parser::parse;
/// let items = parse("1,2,[3,4]");
/// assert_eq!(Node::List(items).to_string(), "[[4, 3], 2, 1]");
/// ```
pub fn parse(buffer: &str) -> Vec<Node> {
    let chars: Vec<char> = buffer.chars().collect();
    parse_level(&chars)
}

// ============================================================================
// LEVEL SCANNER
// ============================================================================

fn parse_level(buffer: &[char]) -> Vec<Node> {
    let mut acc = VecDeque::new();
    let mut i = 0;

    while i < buffer.len() {
        match buffer[i] {
            ']' => break,
            '[' => {
                let nested = parse_level(&buffer[i + 1..]);
                acc.push_front(Node::List(nested));
                i += matched_span_len(&buffer[i..]);
            }
            ',' | ' ' => i += 1,
            c => {
                acc.push_front(Node::Leaf(c));
                i += 1;
            }
        }
    }

    Vec::from(acc)
}

/// Length of the bracketed span at the start of `region`, closing bracket
/// included.
///
/// `region` begins with the `[` being skipped and runs to the end of the
/// enclosing buffer. The target depth is the number of `[` seen before the
/// first `]` in the region, and the span ends at the `]` that brings the depth
/// back to zero. A sublist holding two or more sibling sublists is therefore
/// skipped short. If the brackets never balance the whole region is consumed.
pub fn matched_span_len(region: &[char]) -> usize {
    let mut depth = region
        .iter()
        .take_while(|&&c| c != ']')
        .filter(|&&c| c == '[')
        .count();

    let mut end = 0;
    for &c in region {
        if depth == 0 {
            break;
        }
        if c == ']' {
            depth -= 1;
        }
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(body: &str) -> String {
        Node::List(parse(body)).to_string()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn flat_list_is_reversed() {
        assert_eq!(reverse("a,b,c"), "[c, b, a]");
    }

    #[test]
    fn nested_list_is_reversed_and_participates_as_one_element() {
        assert_eq!(reverse("1,2,[3,4]"), "[[4, 3], 2, 1]");
        assert_eq!(reverse("1,2,[3,4],5"), "[5, [4, 3], 2, 1]");
    }

    #[test]
    fn reversal_holds_at_every_depth() {
        assert_eq!(reverse("a,[b,[c,d]],e"), "[e, [[d, c], b], a]");
        assert_eq!(reverse("[[[1,2]]]"), "[[[[2, 1]]]]");
    }

    #[test]
    fn empty_sublist_is_one_element() {
        assert_eq!(reverse("a,[],b"), "[b, [], a]");
        assert_eq!(parse("[]").len(), 1);
    }

    #[test]
    fn contiguous_characters_are_separate_leaves() {
        assert_eq!(
            parse("ab,c"),
            vec![Node::Leaf('c'), Node::Leaf('b'), Node::Leaf('a')]
        );
    }

    #[test]
    fn spaces_are_delimiters() {
        assert_eq!(reverse("a, b ,  c"), "[c, b, a]");
    }

    #[test]
    fn empty_body_yields_empty_list() {
        assert!(parse("").is_empty());
        assert!(parse(" , ,").is_empty());
    }

    #[test]
    fn closing_bracket_ends_the_level() {
        assert_eq!(reverse("a,b],c"), "[b, a]");
    }

    #[test]
    fn unclosed_sublist_runs_to_end_of_buffer() {
        assert_eq!(reverse("a,[b,c"), "[[c, b], a]");
    }

    #[test]
    fn non_ascii_leaves_are_kept_whole() {
        assert_eq!(reverse("é,[ü,ß]"), "[[ß, ü], é]");
    }

    #[test]
    fn sibling_sublists_cut_the_enclosing_level_short() {
        // The skip over `[[a],[b]]` stops at its inner `]`, and the next
        // character closes the top level before `y` is reached.
        assert_eq!(reverse("x,[[a],[b]],y"), "[[[b], [a]], x]");
    }

    #[test]
    fn span_of_simple_sublist() {
        assert_eq!(matched_span_len(&chars("[3,4],5")), 5);
        assert_eq!(matched_span_len(&chars("[]")), 2);
    }

    #[test]
    fn span_of_chain_of_sublists() {
        assert_eq!(matched_span_len(&chars("[b,[c,d]],e")), 9);
        assert_eq!(matched_span_len(&chars("[a,[b],c],d")), 9);
    }

    #[test]
    fn span_counts_opens_before_first_close_only() {
        // Two opens precede the first `]`, so the span ends at the second `]`.
        assert_eq!(matched_span_len(&chars("[[a],[b]],y")), 8);
    }

    #[test]
    fn span_of_unbalanced_region_is_whole_region() {
        assert_eq!(matched_span_len(&chars("[a,b")), 4);
    }
}
