use crate::parsing::{
    blocks::container::ContainerBlock,
    cursor::{Context, LineCursor},
};

/// An ordered or unordered list.
///
/// Tightness and the start number are decided once, when the list has been
/// parsed completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    items: Vec<ContainerBlock>,
    is_ordered: bool,
    is_tight: bool,
    start_number: usize,
}

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListMarker {
    /// The number of an ordered marker, `None` for bullets.
    number: Option<usize>,
    /// Column at which the item's content starts.
    content_indent: usize,
}

impl ListMarker {
    const BULLETS: [u8; 3] = [b'*', b'-', b'+'];
    const MAX_DIGITS: usize = 9;

    fn detect(line: &str) -> Option<Self> {
        let bytes = line.as_bytes();
        let offset = bytes.iter().take_while(|&&b| b == b' ').count();
        if offset > 3 {
            return None;
        }

        let is_bullet =
            Self::BULLETS.contains(bytes.get(offset)?) && bytes.get(offset + 1) == Some(&b' ');

        // `marker_end` is the index of the space that must follow the marker.
        let (number, marker_end) = if is_bullet {
            (None, offset + 1)
        } else {
            let digits = bytes[offset..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delimiter = offset + digits;
            if !matches!(bytes.get(delimiter), Some(b'.' | b')'))
                || bytes.get(delimiter + 1) != Some(&b' ')
            {
                return None;
            }
            let number = line[offset..delimiter].parse().ok()?;
            (Some(number), delimiter + 1)
        };

        let minimal_indent = marker_end + 1;
        let spaces = bytes[marker_end..]
            .iter()
            .take_while(|&&b| b == b' ')
            .count();

        // An item starting with indented code keeps only the minimal indent.
        let content_indent = if spaces > 4 {
            minimal_indent
        } else {
            marker_end + spaces
        };

        Some(Self {
            number,
            content_indent,
        })
    }

    fn is_ordered(&self) -> bool {
        self.number.is_some()
    }
}

impl List {
    pub fn items(&self) -> &[ContainerBlock] {
        &self.items
    }

    pub fn is_ordered(&self) -> bool {
        self.is_ordered
    }

    pub fn is_tight(&self) -> bool {
        self.is_tight
    }

    pub fn start_number(&self) -> usize {
        self.start_number
    }

    /// Parses a list starting at the current line.
    ///
    /// While a paragraph is open only bullet lists and ordered lists starting
    /// at 1 may begin. A marker of the other list kind ends the list.
    pub fn parse(cursor: &mut LineCursor<'_>, is_interrupting_paragraph: bool) -> Option<Self> {
        let mut items: Vec<ContainerBlock> = Vec::new();
        let mut is_ordered = false;
        let mut is_tight = true;
        let mut has_trailing_blank_lines = false;
        let mut start_number = 1;

        while let Some(line) = cursor.current() {
            let first = items.is_empty();

            let Some(marker) = ListMarker::detect(line) else {
                if first {
                    return None;
                }
                break;
            };

            if first {
                if let Some(number) = marker.number {
                    if is_interrupting_paragraph && number != 1 {
                        return None;
                    }
                    start_number = number;
                }
                is_ordered = marker.is_ordered();
            } else if marker.is_ordered() != is_ordered {
                break;
            }

            is_tight = is_tight && !has_trailing_blank_lines;

            let item = cursor.with_context(
                Context::list_item(marker.content_indent),
                ContainerBlock::parse,
            );
            is_tight = is_tight && !item.has_blank_lines();
            has_trailing_blank_lines = has_trailing_blank_lines || item.has_trailing_blank_lines();
            items.push(item);
        }

        if items.is_empty() {
            return None;
        }

        Some(Self {
            items,
            is_ordered,
            is_tight,
            start_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::Block;
    use rstest::rstest;

    fn parse(source: &str) -> Option<List> {
        List::parse(&mut LineCursor::new(source), false)
    }

    fn item_texts(list: &List) -> Vec<String> {
        list.items()
            .iter()
            .map(|item| match item.blocks() {
                [Block::Paragraph(p)] => p.text.as_str().to_string(),
                other => format!("{other:?}"),
            })
            .collect()
    }

    #[rstest]
    #[case("- a", None, 2)]
    #[case("* a", None, 2)]
    #[case("+ a", None, 2)]
    #[case("   - a", None, 5)]
    #[case("-    a", None, 5)]
    #[case("-      code", None, 2)]
    #[case("1. a", Some(1), 3)]
    #[case("7) a", Some(7), 3)]
    #[case("123456789. a", Some(123456789), 11)]
    fn detects_markers(#[case] line: &str, #[case] number: Option<usize>, #[case] indent: usize) {
        let marker = ListMarker::detect(line).unwrap();
        assert_eq!(marker.number, number);
        assert_eq!(marker.content_indent, indent);
    }

    #[rstest]
    #[case("    - a")]
    #[case("-a")]
    #[case("1.a")]
    #[case("1234567890. a")]
    #[case("a. b")]
    #[case("-")]
    #[case("")]
    fn rejects_non_markers(#[case] line: &str) {
        assert_eq!(ListMarker::detect(line), None);
    }

    #[test]
    fn tight_unordered_list() {
        let list = parse("- a\n- b").unwrap();
        assert!(!list.is_ordered());
        assert!(list.is_tight());
        assert_eq!(item_texts(&list), ["a", "b"]);
    }

    #[test]
    fn ordered_list_start_number() {
        let list = parse("3. c\n4. d").unwrap();
        assert!(list.is_ordered());
        assert_eq!(list.start_number(), 3);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn blank_line_between_items_makes_list_loose() {
        let list = parse("- a\n\n- b").unwrap();
        assert!(!list.is_tight());
        assert_eq!(item_texts(&list), ["a", "b"]);
    }

    #[test]
    fn blank_line_inside_item_makes_list_loose() {
        let list = parse("- a\n\n  b\n- c").unwrap();
        assert!(!list.is_tight());
        assert_eq!(list.items()[0].blocks().len(), 2);
    }

    #[test]
    fn trailing_blank_line_after_last_item_keeps_list_tight() {
        let mut cursor = LineCursor::new("- a\n- b\n\nafter");
        let list = List::parse(&mut cursor, false).unwrap();
        assert!(list.is_tight());
        assert_eq!(cursor.current(), Some("after"));
    }

    #[test]
    fn other_list_kind_ends_list() {
        let mut cursor = LineCursor::new("- a\n1. b");
        let list = List::parse(&mut cursor, false).unwrap();
        assert_eq!(list.items().len(), 1);
        assert_eq!(cursor.current(), Some("1. b"));
    }

    #[test]
    fn only_ordered_lists_starting_at_one_interrupt_paragraphs() {
        let mut cursor = LineCursor::new("2. foo");
        assert_eq!(List::parse(&mut cursor, true), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = LineCursor::new("1. foo");
        assert!(List::parse(&mut cursor, true).is_some());

        let mut cursor = LineCursor::new("- foo");
        assert!(List::parse(&mut cursor, true).is_some());
    }

    #[test]
    fn nested_list() {
        let list = parse("- a\n  - b\n- c").unwrap();
        assert!(list.is_tight());
        let [Block::Paragraph(_), Block::List(inner)] = list.items()[0].blocks() else {
            panic!("unexpected item: {:?}", list.items()[0]);
        };
        assert_eq!(item_texts(inner), ["b"]);
        assert_eq!(item_texts(&list)[1], "c");
    }

    #[test]
    fn indented_code_inside_item() {
        let list = parse("- a\n\n      code").unwrap();
        let [Block::Paragraph(_), Block::CodeBlock(code)] = list.items()[0].blocks() else {
            panic!("unexpected item: {:?}", list.items()[0]);
        };
        assert_eq!(code.code, "code\n");
    }

    #[test]
    fn item_starting_with_indented_code() {
        let list = parse("-     code").unwrap();
        let [Block::CodeBlock(code)] = list.items()[0].blocks() else {
            panic!("unexpected item: {:?}", list.items()[0]);
        };
        assert_eq!(code.code, "code\n");
    }

    #[test]
    fn unindented_line_ends_item() {
        let mut cursor = LineCursor::new("- a\nb");
        let list = List::parse(&mut cursor, false).unwrap();
        assert_eq!(item_texts(&list), ["a"]);
        assert_eq!(cursor.current(), Some("b"));
    }
}
