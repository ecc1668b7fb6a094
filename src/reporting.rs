use crate::merge::MergeReport;
use crate::trie::{Trie, TrieNode};
use crate::SpindleError;
use tiktoken_rs::get_bpe_from_model;
use tracing::{debug, info, trace};

/// Counts the tokens of every merged block with the tokenizer for `model`.
pub fn build_token_trie(report: &MergeReport, model: &str) -> Result<Trie, SpindleError> {
    debug!("Loading tokenizer for model {}", model);
    let tokenizer =
        get_bpe_from_model(model).map_err(|e| SpindleError::TokenizerError(e.to_string()))?;

    let mut trie = Trie::new();
    for file in &report.merged_files {
        let token_count = tokenizer.encode_ordinary(report.block(file)).len();
        trace!("File {} has {} tokens", file.path.display(), token_count);
        trie.insert(&file.path, token_count);
    }
    Ok(trie)
}

/// Logs token counts for the merged files as a directory tree.
pub fn print_stats(report: &MergeReport, model: &str) -> Result<(), SpindleError> {
    let trie = build_token_trie(report, model)?;
    info!("Overall ({} tokens)", trie.root().total_tokens());
    for line in render_tree(trie.root()) {
        info!("{}", line);
    }
    Ok(())
}

pub fn render_tree(root: &TrieNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_children(root, "", &mut lines);
    lines
}

fn render_children(node: &TrieNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };

        match child.token_count {
            Some(tokens) if child.children.is_empty() => {
                lines.push(format!("{}{} {} ({} tokens)", prefix, connector, name, tokens));
            }
            _ => {
                lines.push(format!(
                    "{}{} {}/ ({} tokens)",
                    prefix,
                    connector,
                    name,
                    child.total_tokens()
                ));
                let child_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "┃" });
                render_children(child, &child_prefix, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn tree_lists_directories_before_descending() {
        let mut trie = Trie::new();
        trie.insert(Path::new("src/lib.rs"), 4);
        trie.insert(Path::new("src/main.rs"), 6);
        trie.insert(Path::new("z.md"), 1);

        assert_eq!(
            render_tree(trie.root()),
            vec![
                "┣━━ src/ (10 tokens)",
                "┃   ┣━━ lib.rs (4 tokens)",
                "┃   ┗━━ main.rs (6 tokens)",
                "┗━━ z.md (1 tokens)",
            ]
        );
    }
}
