//! Reassembling classified lines into a renumbered list.
use crate::classify::ClassifiedLine;
use crate::error::ClassificationError;

/// Render leading text plus the renumbered list.
///
/// A placeholder in the first slot is dropped. Numbering starts at 1 and
/// restarts after every unparsed fragment, which is emitted unchanged.
pub fn render(
    leading_text: Option<&str>,
    sequence: &[ClassifiedLine],
) -> Result<String, ClassificationError> {
    let sequence = match sequence {
        [first, rest @ ..] if first.is_placeholder() => rest,
        _ => sequence,
    };
    if sequence.is_empty() {
        return Err(ClassificationError::NoElementsRecognized);
    }

    let mut out = String::new();
    if let Some(leading) = leading_text.filter(|text| !text.is_empty()) {
        out.push_str(leading);
        out.push('\n');
    }

    let mut id = 0usize;
    let items: Vec<String> = sequence
        .iter()
        .map(|line| match line {
            ClassifiedLine::Unparsed(original) => {
                id = 0;
                original.clone()
            }
            ClassifiedLine::Element(content) => {
                id += 1;
                format!("{id}. {content}")
            }
        })
        .collect();
    out.push_str(&items.join("\n"));
    Ok(out)
}
