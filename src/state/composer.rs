//! Question list model for the form composer
//!
//! The composer owns an ordered list of questions plus the pending text the
//! user is typing (the new-question prompt and one option buffer per
//! question). Every mutation is a single synchronous update.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Question kind, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    ShortAnswer,
    MultipleChoice,
    Checkbox,
    FileUpload,
}

impl QuestionKind {
    /// All kinds in button order
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::ShortAnswer,
        QuestionKind::MultipleChoice,
        QuestionKind::Checkbox,
        QuestionKind::FileUpload,
    ];

    /// Whether questions of this kind carry an option list
    pub fn is_choice(self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Checkbox)
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortAnswer => "Short Answer",
            Self::MultipleChoice => "MCQ",
            Self::Checkbox => "Checkbox",
            Self::FileUpload => "File Upload",
        }
    }

    /// Short tag shown on question cards
    pub fn badge(self) -> &'static str {
        match self {
            Self::ShortAnswer => "short",
            Self::MultipleChoice => "mcq",
            Self::Checkbox => "checkbox",
            Self::FileUpload => "file",
        }
    }
}

/// Reference to a user-selected file. The contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub path: PathBuf,
    pub name: String,
}

impl AttachedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self { path, name }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A single question in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Present only for choice kinds
    pub options: Option<Vec<String>>,
    pub attached_file: Option<AttachedFile>,
}

impl Question {
    fn new(id: String, kind: QuestionKind, prompt: String) -> Self {
        Self {
            id,
            kind,
            prompt,
            options: kind.is_choice().then(Vec::new),
            attached_file: None,
        }
    }
}

/// How strictly option text and attachments are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Reject attachments on non-file questions and blank option text
    #[default]
    Strict,
    /// Accept both as given
    Lenient,
}

/// The form being edited, with its pending input buffers
#[derive(Debug, Clone, Default)]
pub struct FormComposer {
    questions: Vec<Question>,
    pending_prompt: String,
    pending_options: HashMap<String, String>,
    policy: ValidationPolicy,
}

impl FormComposer {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Text typed into the new-question input
    pub fn pending_prompt(&self) -> &str {
        &self.pending_prompt
    }

    pub fn pending_prompt_mut(&mut self) -> &mut String {
        &mut self.pending_prompt
    }

    /// Text typed into the option input of the question with `id`
    pub fn pending_option(&self, id: &str) -> &str {
        self.pending_options.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn pending_option_mut(&mut self, id: &str) -> &mut String {
        self.pending_options.entry(id.to_string()).or_default()
    }

    /// Positional id; unique as long as questions are never removed.
    fn next_id(&self) -> String {
        format!("question-{}", self.questions.len() + 1)
    }

    /// Append a question. Returns false (and changes nothing) when the
    /// prompt is blank. On success the pending prompt is cleared.
    pub fn add_question(&mut self, kind: QuestionKind, prompt: &str) -> bool {
        if prompt.trim().is_empty() {
            return false;
        }

        let question = Question::new(self.next_id(), kind, prompt.to_string());
        tracing::debug!(id = %question.id, kind = kind.badge(), "Question added");
        self.questions.push(question);
        self.pending_prompt.clear();
        true
    }

    /// Append a question using the pending prompt text
    pub fn add_pending_question(&mut self, kind: QuestionKind) -> bool {
        let prompt = self.pending_prompt.clone();
        self.add_question(kind, &prompt)
    }

    /// Append `text` to the options of the question at `index`.
    ///
    /// No-op for out-of-range indices and for kinds without options. Under
    /// [`ValidationPolicy::Strict`] the text is trimmed and blank text is
    /// rejected. On success the pending option text for that question is
    /// cleared.
    pub fn add_option(&mut self, index: usize, text: &str) -> bool {
        let Some(question) = self.questions.get_mut(index) else {
            return false;
        };
        let Some(options) = question.options.as_mut() else {
            return false;
        };

        let text = match self.policy {
            ValidationPolicy::Strict => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return false;
                }
                trimmed
            }
            ValidationPolicy::Lenient => text,
        };

        options.push(text.to_string());
        self.pending_options.insert(question.id.clone(), String::new());
        true
    }

    /// Append the pending option text of the question at `index`
    pub fn add_pending_option(&mut self, index: usize) -> bool {
        let Some(question) = self.questions.get(index) else {
            return false;
        };
        let text = self.pending_option(&question.id).to_string();
        self.add_option(index, &text)
    }

    /// Whether [`Self::attach_file`] would accept a file for `index`
    pub fn accepts_attachment(&self, index: usize) -> bool {
        match self.questions.get(index) {
            None => false,
            Some(_) if self.policy == ValidationPolicy::Lenient => true,
            Some(q) => q.kind == QuestionKind::FileUpload,
        }
    }

    /// Set or clear (`None`) the attached file of the question at `index`
    pub fn attach_file(&mut self, index: usize, file: Option<AttachedFile>) -> bool {
        if !self.accepts_attachment(index) {
            return false;
        }
        if let Some(question) = self.questions.get_mut(index) {
            question.attached_file = file;
            return true;
        }
        false
    }

    /// Move the question at `source` to `destination`.
    ///
    /// A `None` destination (drag dropped outside the list) and any
    /// out-of-range index leave the list untouched.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> bool {
        let Some(destination) = destination else {
            return false;
        };
        let len = self.questions.len();
        if source >= len || destination >= len {
            return false;
        }

        let moved = self.questions.remove(source);
        self.questions.insert(destination, moved);
        tracing::debug!(source, destination, "Questions reordered");
        true
    }
}
