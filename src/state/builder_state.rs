//! Form builder screen state: the composer plus focus, selection, drag,
//! and the inline option/file inputs

use super::composer::{AttachedFile, FormComposer, QuestionKind, ValidationPolicy};
use super::drag::DragGesture;
use super::forms::{Form, InputField};

/// Focusable regions of the builder screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    #[default]
    Prompt,
    KindButtons,
    Questions,
}

impl BuilderFocus {
    const ORDER: [BuilderFocus; 3] = [Self::Prompt, Self::KindButtons, Self::Questions];
}

/// Inline input opened on a question card
#[derive(Debug, Clone)]
pub enum BuilderEditor {
    /// Typing a new option; the text lives in the composer's pending buffer
    Option { index: usize },
    /// Typing a file path for the picker
    FilePath { index: usize, input: InputField },
}

#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    pub composer: FormComposer,
    pub focus: BuilderFocus,
    pub selected_kind: usize,
    pub selected_question: usize,
    pub drag: Option<DragGesture>,
    pub editor: Option<BuilderEditor>,
}

impl BuilderState {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            composer: FormComposer::new(policy),
            ..Default::default()
        }
    }

    pub fn selected_kind(&self) -> QuestionKind {
        QuestionKind::ALL[self.selected_kind.min(QuestionKind::ALL.len() - 1)]
    }

    pub fn next_kind(&mut self) {
        self.selected_kind = (self.selected_kind + 1) % QuestionKind::ALL.len();
    }

    pub fn prev_kind(&mut self) {
        if self.selected_kind == 0 {
            self.selected_kind = QuestionKind::ALL.len() - 1;
        } else {
            self.selected_kind -= 1;
        }
    }

    /// Add a question of the highlighted kind from the pending prompt
    pub fn add_selected_kind(&mut self) -> bool {
        let kind = self.selected_kind();
        self.composer.add_pending_question(kind)
    }

    pub fn select_next_question(&mut self) {
        if self.selected_question + 1 < self.composer.len() {
            self.selected_question += 1;
        }
    }

    pub fn select_prev_question(&mut self) {
        self.selected_question = self.selected_question.saturating_sub(1);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Grab the selected question
    pub fn begin_drag(&mut self) -> bool {
        if self.drag.is_some() || self.selected_question >= self.composer.len() {
            return false;
        }
        self.drag = Some(DragGesture::grab(self.selected_question));
        true
    }

    /// Drop the grabbed question on the current target
    pub fn drop_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let moved = self.composer.reorder(drag.source, drag.destination);
        if let (true, Some(destination)) = (moved, drag.destination) {
            self.selected_question = destination;
        }
        moved
    }

    /// Abandon the drag; the list is left as it was
    pub fn cancel_drag(&mut self) {
        if let Some(mut drag) = self.drag.take() {
            drag.leave();
            self.composer.reorder(drag.source, drag.destination);
        }
    }

    /// Move the selected question one slot in a single gesture
    pub fn nudge_selected(&mut self, up: bool) -> bool {
        if !self.begin_drag() {
            return false;
        }
        if let Some(drag) = self.drag.as_mut() {
            if up {
                drag.move_up();
            } else {
                drag.move_down(self.composer.len());
            }
        }
        self.drop_drag()
    }

    /// Open the option input for the selected question (choice kinds only)
    pub fn open_option_editor(&mut self) -> bool {
        let is_choice = self
            .composer
            .question(self.selected_question)
            .is_some_and(|q| q.options.is_some());
        if is_choice {
            self.editor = Some(BuilderEditor::Option {
                index: self.selected_question,
            });
        }
        is_choice
    }

    /// Open the file path input for the selected question
    pub fn open_file_picker(&mut self) -> bool {
        let index = self.selected_question;
        if !self.composer.accepts_attachment(index) {
            return false;
        }
        let current = self
            .composer
            .question(index)
            .and_then(|q| q.attached_file.as_ref())
            .map(|f| f.path.display().to_string())
            .unwrap_or_default();
        self.editor = Some(BuilderEditor::FilePath {
            index,
            input: InputField::text_with_value("File path", current),
        });
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Append the pending option of the question being edited
    pub fn commit_option(&mut self) -> bool {
        match self.editor {
            Some(BuilderEditor::Option { index }) => self.composer.add_pending_option(index),
            _ => false,
        }
    }

    /// Attach (or clear) the picked file and close the picker
    pub fn commit_file(&mut self, file: Option<AttachedFile>) -> bool {
        match self.editor.take() {
            Some(BuilderEditor::FilePath { index, .. }) => self.composer.attach_file(index, file),
            other => {
                self.editor = other;
                false
            }
        }
    }

    /// Text of the open inline input, for editing keystrokes
    pub fn editor_text_mut(&mut self) -> Option<&mut String> {
        match self.editor.as_mut()? {
            BuilderEditor::Option { index } => {
                let id = self.composer.question(*index)?.id.clone();
                Some(self.composer.pending_option_mut(&id))
            }
            BuilderEditor::FilePath { input, .. } => Some(&mut input.value),
        }
    }
}

impl Form for BuilderState {
    fn field_count(&self) -> usize {
        BuilderFocus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        BuilderFocus::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = BuilderFocus::ORDER[index.min(BuilderFocus::ORDER.len() - 1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_questions(prompts: &[(&str, QuestionKind)]) -> BuilderState {
        let mut state = BuilderState::new(ValidationPolicy::Strict);
        for (prompt, kind) in prompts {
            state.composer.add_question(*kind, prompt);
        }
        state
    }

    fn prompts(state: &BuilderState) -> Vec<String> {
        state
            .composer
            .questions()
            .iter()
            .map(|q| q.prompt.clone())
            .collect()
    }

    mod drag {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_drop_applies_one_reorder() {
            let mut state = with_questions(&[
                ("a", QuestionKind::ShortAnswer),
                ("b", QuestionKind::ShortAnswer),
                ("c", QuestionKind::ShortAnswer),
            ]);
            assert!(state.begin_drag());
            let drag = state.drag.as_mut().unwrap();
            drag.move_down(3);
            drag.move_down(3);

            assert!(state.drop_drag());
            assert_eq!(prompts(&state), vec!["b", "c", "a"]);
            assert_eq!(state.selected_question, 2);
            assert!(!state.is_dragging());
        }

        #[test]
        fn test_cancel_leaves_list_unchanged() {
            let mut state = with_questions(&[
                ("a", QuestionKind::ShortAnswer),
                ("b", QuestionKind::Checkbox),
            ]);
            let before = state.composer.questions().to_vec();

            state.begin_drag();
            state.drag.as_mut().unwrap().move_down(2);
            state.cancel_drag();

            assert_eq!(state.composer.questions(), before.as_slice());
            assert!(!state.is_dragging());
        }

        #[test]
        fn test_drop_outside_targets_is_noop() {
            let mut state = with_questions(&[
                ("a", QuestionKind::ShortAnswer),
                ("b", QuestionKind::ShortAnswer),
            ]);
            state.begin_drag();
            state.drag.as_mut().unwrap().leave();
            assert!(!state.drop_drag());
            assert_eq!(prompts(&state), vec!["a", "b"]);
        }

        #[test]
        fn test_cannot_grab_empty_list() {
            let mut state = BuilderState::new(ValidationPolicy::Strict);
            assert!(!state.begin_drag());
        }

        #[test]
        fn test_nudge_moves_one_slot() {
            let mut state = with_questions(&[
                ("a", QuestionKind::ShortAnswer),
                ("b", QuestionKind::ShortAnswer),
            ]);
            assert!(state.nudge_selected(false));
            assert_eq!(prompts(&state), vec!["b", "a"]);
            assert_eq!(state.selected_question, 1);

            assert!(state.nudge_selected(true));
            assert_eq!(prompts(&state), vec!["a", "b"]);
            assert_eq!(state.selected_question, 0);
        }
    }

    mod editors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_option_editor_only_for_choice_kinds() {
            let mut state = with_questions(&[
                ("Name", QuestionKind::ShortAnswer),
                ("Color", QuestionKind::MultipleChoice),
            ]);
            assert!(!state.open_option_editor());
            assert!(state.editor.is_none());

            state.select_next_question();
            assert!(state.open_option_editor());
            state.editor_text_mut().unwrap().push_str("Red");
            assert!(state.commit_option());

            assert_eq!(
                state.composer.question(1).unwrap().options,
                Some(vec!["Red".to_string()])
            );
            assert_eq!(state.editor_text_mut().cloned(), Some(String::new()));
        }

        #[test]
        fn test_file_picker_strict_only_file_kind() {
            let mut state = with_questions(&[
                ("Name", QuestionKind::ShortAnswer),
                ("CV", QuestionKind::FileUpload),
            ]);
            assert!(!state.open_file_picker());

            state.select_next_question();
            assert!(state.open_file_picker());
            assert!(state.commit_file(Some(AttachedFile::from_path("/tmp/cv.pdf"))));
            assert!(state.editor.is_none());
            assert_eq!(
                state.composer.question(1).unwrap().attached_file,
                Some(AttachedFile::from_path("/tmp/cv.pdf"))
            );
        }

        #[test]
        fn test_file_picker_prefills_current_path() {
            let mut state = with_questions(&[("CV", QuestionKind::FileUpload)]);
            state
                .composer
                .attach_file(0, Some(AttachedFile::from_path("/tmp/cv.pdf")));
            state.open_file_picker();
            assert_eq!(
                state.editor_text_mut().cloned(),
                Some("/tmp/cv.pdf".to_string())
            );
        }

        #[test]
        fn test_commit_file_without_picker_is_noop() {
            let mut state = with_questions(&[("CV", QuestionKind::FileUpload)]);
            assert!(!state.commit_file(None));
        }
    }

    #[test]
    fn test_kind_selection_wraps() {
        let mut state = BuilderState::default();
        assert_eq!(state.selected_kind(), QuestionKind::ShortAnswer);
        state.prev_kind();
        assert_eq!(state.selected_kind(), QuestionKind::FileUpload);
        state.next_kind();
        assert_eq!(state.selected_kind(), QuestionKind::ShortAnswer);
    }

    #[test]
    fn test_add_selected_kind_uses_pending_prompt() {
        let mut state = BuilderState::default();
        state.next_kind();
        state.composer.pending_prompt_mut().push_str("Color");
        assert!(state.add_selected_kind());

        let question = state.composer.question(0).unwrap();
        assert_eq!(question.kind, QuestionKind::MultipleChoice);
        assert_eq!(state.composer.pending_prompt(), "");
    }

    #[test]
    fn test_question_selection_stays_in_bounds() {
        let mut state = with_questions(&[("a", QuestionKind::ShortAnswer)]);
        state.select_next_question();
        assert_eq!(state.selected_question, 0);
        state.select_prev_question();
        assert_eq!(state.selected_question, 0);
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = BuilderState::default();
        state.next_field();
        assert_eq!(state.focus, BuilderFocus::KindButtons);
        state.next_field();
        state.next_field();
        assert_eq!(state.focus, BuilderFocus::Prompt);
    }
}
