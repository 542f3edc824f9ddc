//! Prompt Builder System
//!
//! Standardized prompt construction for completion calls.
//! Every feature prompt follows the same shape:
//!
//! 1. **Instruction**: one sentence saying what to do
//! 2. **Subject**: the user content, quoted
//! 3. **Checklist / Requirements**: bullet lists steering the model
//! 4. **Output Format**: the JSON schema or line format to answer in

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Plain instruction paragraph
    Instruction(String),
    /// User content wrapped in double quotes, with optional label
    Quoted {
        label: Option<String>,
        content: String,
        /// Context line printed right after the closing quote
        hint: Option<String>,
    },
    /// Verbatim block (post list, conversation transcript)
    Block(String),
    /// Bulleted list under a header line
    Checklist { header: String, items: Vec<String> },
    /// JSON answer template
    JsonFormat {
        preamble: String,
        template: String,
    },
    /// Custom trailing text
    Custom(String),
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instruction paragraph
    pub fn instruction(mut self, text: &str) -> Self {
        self.sections
            .push(PromptSection::Instruction(text.to_string()));
        self
    }

    /// Add the subject text, quoted
    pub fn quoted(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Quoted {
            label: None,
            content: content.to_string(),
            hint: None,
        });
        self
    }

    /// Add the subject text, quoted, after a label (`Original: "..."`)
    pub fn labeled(mut self, label: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Quoted {
            label: Some(label.to_string()),
            content: content.to_string(),
            hint: None,
        });
        self
    }

    /// Add a verbatim block
    pub fn block(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Block(content.to_string()));
        self
    }

    /// Add a bulleted checklist
    pub fn checklist(mut self, header: &str, items: &[&str]) -> Self {
        self.sections.push(PromptSection::Checklist {
            header: header.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Add "Requirements:" bullets
    pub fn requirements(self, items: &[&str]) -> Self {
        self.checklist("Requirements:", items)
    }

    /// Ask for a JSON answer matching `template`
    pub fn json_format(mut self, preamble: &str, template: &str) -> Self {
        self.sections.push(PromptSection::JsonFormat {
            preamble: preamble.to_string(),
            template: template.to_string(),
        });
        self
    }

    /// Add custom trailing text
    pub fn custom(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Custom(content.to_string()));
        self
    }

    /// Append a line directly under the previous section
    ///
    /// Used for short context hints that belong to the subject.
    pub fn hint(mut self, line: &str) -> Self {
        match self.sections.last_mut() {
            Some(PromptSection::Quoted { hint, .. }) => {
                *hint = Some(line.to_string());
            }
            _ => self.sections.push(PromptSection::Instruction(line.to_string())),
        }
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Instruction(text) | PromptSection::Custom(text) => {
                    prompt.push_str(&text);
                }
                PromptSection::Quoted {
                    label,
                    content,
                    hint,
                } => {
                    if let Some(label) = label {
                        prompt.push_str(&format!("{}: ", label));
                    }
                    prompt.push_str(&format!("\"{}\"", content));
                    if let Some(hint) = hint {
                        prompt.push('\n');
                        prompt.push_str(&hint);
                    }
                }
                PromptSection::Block(content) => {
                    prompt.push_str(&content);
                }
                PromptSection::Checklist { header, items } => {
                    prompt.push_str(&header);
                    for item in items {
                        prompt.push_str(&format!("\n- {}", item));
                    }
                }
                PromptSection::JsonFormat { preamble, template } => {
                    prompt.push_str(&preamble);
                    prompt.push('\n');
                    prompt.push_str(template.trim());
                }
            }
            prompt.push_str("\n\n");
        }

        prompt.trim_end().to_string()
    }
}
