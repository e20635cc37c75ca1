//! Prompt templates

/// Prompt asking for a one-paragraph summary of (possibly truncated) file content.
pub fn summary_prompt(file_name: &str, content: &str) -> String {
    format!(
        "Provide a concise, one-paragraph summary for a file named '{file_name}'. \
         Focus on its main purpose and key topics.\n\n---\n\n{content}"
    )
}

/// Prompt answering `question` from the full text of one file.
pub fn grounding_prompt(question: &str, file_name: &str, content: &str) -> String {
    format!(
        "You are a helpful assistant. The user is asking a question about a specific file. \
         Here is the user's question: '{question}'\n\n\
         And here is the FULL text content of the file named '{file_name}':\n\n---\n\n\
         {content}\n\n---\n\n\
         Please answer the user's question based on the provided file content."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt() {
        let prompt = summary_prompt("notes.txt", "hello world");
        assert!(prompt.starts_with(
            "Provide a concise, one-paragraph summary for a file named 'notes.txt'. Focus on its main purpose and key topics."
        ));
        assert!(prompt.ends_with("\n\n---\n\nhello world"));
    }

    #[test]
    fn test_grounding_prompt_embeds_question_and_content() {
        let prompt = grounding_prompt("what does a.py do?", "a.py", "print('hi')");
        assert!(prompt.contains("Here is the user's question: 'what does a.py do?'"));
        assert!(prompt.contains("the file named 'a.py':\n\n---\n\nprint('hi')\n\n---\n\n"));
        assert!(prompt.ends_with("based on the provided file content."));
    }
}
