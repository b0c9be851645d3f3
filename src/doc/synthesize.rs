//! @acp:module "Documentation Synthesizer"
//! @acp:summary "Skeleton doxygen blocks for records lacking valid documentation"
//! @acp:domain documentation
//! @acp:layer core

use std::fmt::Write as _;

use super::model::SignatureRecord;

/// @acp:summary "Emit a skeleton doxygen block for a record"
///
/// One blank brief line, one `@param` line per analyzer parameter, then a
/// `@throws` placeholder for `exception`, nothing for `void`, and a `@return`
/// placeholder for anything else.
pub fn synthesize(record: &SignatureRecord) -> String {
    let mut block = String::from("/**\n * \n");
    for param in &record.params {
        let _ = writeln!(block, " * @param {} ", param.name);
    }
    match record.returns.as_str() {
        "exception" => block.push_str(" * @throws \n"),
        "void" => {}
        _ => block.push_str(" * @return \n"),
    }
    block.push_str(" */\n");
    block
}

/// @acp:summary "Insert a block before a 0-based line of source text"
/// Line numbers past the end append the block at the end.
pub fn splice_block(source: &str, start_line: usize, block: &str) -> String {
    let offset: usize = source
        .split_inclusive('\n')
        .take(start_line)
        .map(str::len)
        .sum();

    let mut out = String::with_capacity(source.len() + block.len());
    out.push_str(&source[..offset]);
    out.push_str(block);
    out.push_str(&source[offset..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::model::Parameter;
    use pretty_assertions::assert_eq;

    fn record(params: &[&str], returns: &str) -> SignatureRecord {
        SignatureRecord {
            name: "tekUpdate".to_string(),
            params: params.iter().map(|n| Parameter::new(*n, "int")).collect(),
            returns: returns.to_string(),
            doxygen_comment: None,
            file: "src/update.c".to_string(),
            start_line: 1,
            num_lines: 4,
            num_comments: 0,
            hash: None,
        }
    }

    #[test]
    fn test_void_skeleton() {
        assert_eq!(
            synthesize(&record(&["dt", "world"], "void")),
            "/**\n * \n * @param dt \n * @param world \n */\n"
        );
    }

    #[test]
    fn test_exception_skeleton() {
        assert_eq!(
            synthesize(&record(&[], "exception")),
            "/**\n * \n * @throws \n */\n"
        );
    }

    #[test]
    fn test_value_and_unrecognised_skeleton() {
        let expected = "/**\n * \n * @param n \n * @return \n */\n";
        assert_eq!(synthesize(&record(&["n"], "float")), expected);
        assert_eq!(synthesize(&record(&["n"], "")), expected);
    }

    #[test]
    fn test_splice_block() {
        let source = "#include <x.h>\nint f(void) {\n    return 1;\n}\n";
        let out = splice_block(source, 1, "/** doc */\n");
        assert_eq!(out, "#include <x.h>\n/** doc */\nint f(void) {\n    return 1;\n}\n");
        assert_eq!(splice_block(source, 0, "A\n"), format!("A\n{}", source));
        assert_eq!(splice_block(source, 99, "Z\n"), format!("{}Z\n", source));
    }
}
