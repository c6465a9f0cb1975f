//! Interactive gap-filling
//!
//! Asks for the options the caller left out: kind letter first, then
//! the kind-specific follow-ups. This adapter only fills gaps in
//! `RawOptions`; resolution itself stays a pure function and never
//! prompts.

use anyhow::Result;
use rustyline::DefaultEditor;

use crate::config::{resolver::normalize_kind, Kind, RawOptions};

/// Prompt on the terminal for any options still missing.
pub fn prompt_for_gaps(options: &mut RawOptions) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut read = |prompt: &str| -> Result<String> { Ok(editor.readline(prompt)?) };
    fill_gaps(options, &mut read)
}

/// Fill missing options by asking `read` for each gap.
///
/// Separated from the terminal so tests can drive it with canned
/// answers.
pub fn fill_gaps(
    options: &mut RawOptions,
    read: &mut dyn FnMut(&str) -> Result<String>,
) -> Result<()> {
    if options.kind.is_none() {
        let answer = read(
            "Create Algorithm, DaVinciAlgorithm, FunctionalAlgorithm, Tool, Interface or simple class  A/D/F/T/I/[simple] : ",
        )?;
        if !answer.trim().is_empty() {
            options.kind = Some(answer.trim().to_string());
        }
    }

    match normalize_kind(options.kind.as_deref()) {
        Kind::Tool => {
            if options.interface.is_none() {
                let answer = read("Interface name (blank = not using an interface) : ")?;
                let answer = answer.trim();
                if !answer.is_empty() {
                    options.interface = Some(answer.to_string());
                }
            }
        }
        Kind::Functional => {
            if options.functional.is_none() {
                let answer = read("Transformer, Producer, Consumer, MultiTransformer [T]/P/C/M : ")?;
                if !answer.trim().is_empty() {
                    options.functional = Some(answer.trim().to_string());
                }
            }
            let shape = options.functional.as_deref().unwrap_or("T");
            let is_producer = matches!(shape.to_ascii_lowercase().as_str(), "p" | "producer");
            let is_consumer = matches!(shape.to_ascii_lowercase().as_str(), "c" | "consumer");

            if options.inputs.is_none() && !is_producer {
                options.inputs = prompt_type_list(read, "input")?;
            }
            if options.outputs.is_none() && !is_consumer {
                options.outputs = prompt_type_list(read, "output")?;
            }
        }
        Kind::Algorithm | Kind::SpecializedAlgorithm => {
            if options.algorithm_type.is_none() {
                let answer = read("Normal, Histo or Tuple [N]/H/T : ")?;
                if !answer.trim().is_empty() {
                    options.algorithm_type = Some(answer.trim().to_string());
                }
            }
        }
        Kind::DomainAlgorithm => {
            if options.domain_type.is_none() {
                let answer = read("Normal, Histo or Tuple [N]/H/T : ")?;
                if !answer.trim().is_empty() {
                    options.domain_type = Some(answer.trim().to_string());
                }
            }
        }
        Kind::PlainClass | Kind::Interface => {}
    }

    Ok(())
}

/// The two-step signature prompt: a yes/no, then a semicolon-joined type
/// list. Declining (or giving nothing) leaves the gap for the resolver's
/// placeholder default.
fn prompt_type_list(
    read: &mut dyn FnMut(&str) -> Result<String>,
    side: &str,
) -> Result<Option<Vec<String>>> {
    let wants = read(&format!("Do you want to declare the {side} type(s)? [y]/n : "))?;
    let wants = wants.trim().to_ascii_lowercase();
    if !(wants.is_empty() || wants == "y" || wants == "yes") {
        return Ok(None);
    }

    let listing = read(&format!("please give the {side} (concatenate with ;) : "))?;
    let types: Vec<String> = listing
        .split(';')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(if types.is_empty() { None } else { Some(types) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(answers: &[&str]) -> impl FnMut(&str) -> Result<String> {
        let answers: Vec<String> = answers.iter().map(|s| s.to_string()).collect();
        let mut index = 0;
        move |_prompt: &str| {
            let answer = answers.get(index).cloned().unwrap_or_default();
            index += 1;
            Ok(answer)
        }
    }

    #[test]
    fn kind_answer_fills_the_gap() {
        let mut options = RawOptions::new("MyAlg");
        let mut read = scripted(&["A", "H"]);

        fill_gaps(&mut options, &mut read).unwrap();
        assert_eq!(options.kind.as_deref(), Some("A"));
        assert_eq!(options.algorithm_type.as_deref(), Some("H"));
    }

    #[test]
    fn supplied_options_are_not_asked_again() {
        let mut options = RawOptions::new("MyAlg");
        options.kind = Some("A".to_string());
        options.algorithm_type = Some("Tuple".to_string());
        let mut read = |_: &str| -> Result<String> { panic!("no prompt expected") };

        fill_gaps(&mut options, &mut read).unwrap();
        assert_eq!(options.algorithm_type.as_deref(), Some("Tuple"));
    }

    #[test]
    fn blank_tool_interface_stays_unset() {
        let mut options = RawOptions::new("MyTool");
        options.kind = Some("T".to_string());
        let mut read = scripted(&["   "]);

        fill_gaps(&mut options, &mut read).unwrap();
        assert!(options.interface.is_none());
    }

    #[test]
    fn functional_flow_collects_signatures() {
        let mut options = RawOptions::new("MyTrans");
        options.kind = Some("F".to_string());
        // shape, declare input? , input list, declare output?, output list
        let mut read = scripted(&["T", "y", "LHCb::Tracks; LHCb::RecVertices", "y", "LHCb::Vertices"]);

        fill_gaps(&mut options, &mut read).unwrap();
        assert_eq!(
            options.inputs,
            Some(vec![
                "LHCb::Tracks".to_string(),
                "LHCb::RecVertices".to_string()
            ])
        );
        assert_eq!(options.outputs, Some(vec!["LHCb::Vertices".to_string()]));
    }

    #[test]
    fn producer_skips_the_input_prompt() {
        let mut options = RawOptions::new("MyProd");
        options.kind = Some("F".to_string());
        // shape, declare output?, output list
        let mut read = scripted(&["P", "n"]);

        fill_gaps(&mut options, &mut read).unwrap();
        assert!(options.inputs.is_none());
        assert!(options.outputs.is_none());
    }

    #[test]
    fn declining_the_listing_leaves_the_default() {
        let mut options = RawOptions::new("MyTrans");
        options.kind = Some("F".to_string());
        let mut read = scripted(&["", "n", "n"]);

        fill_gaps(&mut options, &mut read).unwrap();
        assert!(options.functional.is_none());
        assert!(options.inputs.is_none());
        assert!(options.outputs.is_none());
    }
}
