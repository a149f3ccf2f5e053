/// Line being typed at the bottom of the screen, after a prefix such as `:`
/// or `Save as: `.
#[derive(Debug, Default)]
pub struct Prompt {
    pub prefix: String,
    pub content: String,
}

impl Prompt {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            content: String::new(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.push(c);
    }

    pub fn delete_backward(&mut self) {
        self.content.pop();
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.prefix, self.content)
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_input() {
        let mut prompt = Prompt::new(":");
        prompt.insert_char('w');
        prompt.insert_char('q');
        assert_eq!(prompt.display(), ":wq");

        prompt.delete_backward();
        assert_eq!(prompt.content, "w");
    }

    #[test]
    fn test_delete_on_empty_prompt() {
        let mut prompt = Prompt::new("Save as: ");
        prompt.delete_backward();
        assert_eq!(prompt.display(), "Save as: ");
    }

    #[test]
    fn test_take_clears_content() {
        let mut prompt = Prompt::new(":");
        prompt.insert_char('q');
        assert_eq!(prompt.take(), "q");
        assert!(prompt.content.is_empty());
    }
}
