use std::fs;
use std::io::Write;
use std::path::Path;

use scm_complex::{Configuration, SequencePair};

/// Reads a whitespace-separated list of positive integers. Blank lines and
/// `#` comment lines are ignored.
pub fn load_sequence(path: &Path) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    parse_sequence(&contents).map_err(|err| format!("{}: {err}", path.display()).into())
}

fn parse_sequence(contents: &str) -> Result<Vec<usize>, String> {
    let mut values = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value: usize = token
                .parse()
                .map_err(|_| format!("invalid sequence entry {token:?}"))?;
            values.push(value);
        }
    }
    if values.is_empty() {
        return Err("sequence file contains no entries".to_string());
    }
    Ok(values)
}

/// Loads and validates a degree/size sequence pair from two files.
pub fn load_sequence_pair(
    degrees_path: &Path,
    sizes_path: &Path,
) -> Result<SequencePair, Box<dyn std::error::Error>> {
    let degrees = load_sequence(degrees_path)?;
    let sizes = load_sequence(sizes_path)?;
    Ok(SequencePair::new(degrees, sizes)?)
}

/// Writes one configuration as a facet-list block: a `# Sample:` marker line,
/// then one line per facet holding its sorted vertex indices.
pub fn write_facet_block<W: Write>(
    writer: &mut W,
    index: usize,
    config: &Configuration,
) -> std::io::Result<()> {
    writeln!(writer, "# Sample: {index}")?;
    for facet in config.facet_ids() {
        let members = config
            .facet(facet)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string()))?;
        let line: Vec<String> = members.iter().map(|id| id.as_raw().to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scm_core::VertexId;

    #[test]
    fn sequences_parse_with_comments_and_blanks() {
        let values = parse_sequence("# degrees\n2 2 1\n\n2 1\n").unwrap();
        assert_eq!(values, vec![2, 2, 1, 2, 1]);
    }

    #[test]
    fn junk_tokens_are_rejected() {
        assert!(parse_sequence("1 two 3").is_err());
        assert!(parse_sequence("# only comments\n").is_err());
    }

    #[test]
    fn facet_blocks_render_sorted_members() {
        let config = Configuration::new(
            vec![1, 1, 1],
            vec![2, 1],
            vec![
                vec![VertexId::from_raw(2), VertexId::from_raw(0)],
                vec![VertexId::from_raw(1)],
            ],
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_facet_block(&mut buffer, 3, &config).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "# Sample: 3\n0 2\n1\n");
    }
}
