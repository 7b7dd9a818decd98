//! State of the quiz preview card. Nothing here touches the DOM: the
//! component feeds selections and timer ticks in and renders `view()`.

pub const TOTAL_QUESTIONS: u32 = 10;

/// Preview prompts. Question `n` shows entry `n - 1`; past the end of the
/// list the last prompt stays on screen.
pub const PREVIEW_QUESTIONS: [&str; 5] = [
    "What's your ideal weekend?",
    "How do you handle stress?",
    "Which setting helps you focus best?",
    "How do you prefer to learn something new?",
    "What keeps you going on a hard day?",
];

pub const PREVIEW_OPTIONS: [&str; 4] = [
    "Something calm and quiet",
    "Something social and loud",
    "A bit of both",
    "Depends on the day",
];

pub const COMPLETION_MESSAGE: &str = "Thanks for trying the preview! Sign up to take the full quiz.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection(u32),
    Completed,
}

/// Handed out by `QuizState::select` and redeemed by `QuizState::advance`.
/// Only the ticket from the latest selection is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    // 1..=TOTAL_QUESTIONS while answering, TOTAL_QUESTIONS + 1 once complete
    current: u32,
    selected: Option<usize>,
    question: &'static str,
    // bumped on every selection and restart, never reset
    generation: u64,
    pending: Option<AdvanceTicket>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            current: 1,
            selected: None,
            question: PREVIEW_QUESTIONS[0],
            generation: 0,
            pending: None,
        }
    }
}

impl QuizState {
    pub fn phase(&self) -> Phase {
        if self.current > TOTAL_QUESTIONS {
            Phase::Completed
        } else {
            Phase::AwaitingSelection(self.current)
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks `option` as the single selected option of the current question
    /// and returns the ticket for the advance it schedules. Any ticket handed
    /// out earlier goes stale. `None` when the quiz is complete or the option
    /// does not exist.
    pub fn select(&mut self, option: usize) -> Option<AdvanceTicket> {
        if self.phase() == Phase::Completed || option >= PREVIEW_OPTIONS.len() {
            return None;
        }
        self.selected = Some(option);
        self.generation += 1;
        let ticket = AdvanceTicket(self.generation);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Moves to the next question, or to `Completed` after the last one.
    /// Stale or already redeemed tickets are ignored and return `None`.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Option<Phase> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;

        self.current += 1;
        self.selected = None;
        if let Some(question) = PREVIEW_QUESTIONS.get(self.current as usize - 1) {
            self.question = question;
        }
        Some(self.phase())
    }

    /// Drops the pending advance, if any.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Back to question 1. Tickets from before the restart stay stale.
    pub fn restart(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    pub fn view(&self) -> QuizView {
        match self.phase() {
            Phase::AwaitingSelection(n) => QuizView {
                progress_percent: n * 100 / TOTAL_QUESTIONS,
                progress_label: format!("Question {} of {}", n, TOTAL_QUESTIONS),
                body: QuizBody::Question {
                    text: self.question,
                    options: PREVIEW_OPTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, label)| OptionView {
                            label: *label,
                            selected: self.selected == Some(i),
                        })
                        .collect(),
                },
            },
            Phase::Completed => QuizView {
                progress_percent: 100,
                progress_label: "Quiz Complete!".to_string(),
                body: QuizBody::Complete {
                    message: COMPLETION_MESSAGE,
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub progress_percent: u32,
    pub progress_label: String,
    pub body: QuizBody,
}

impl QuizView {
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizBody {
    Question {
        text: &'static str,
        options: Vec<OptionView>,
    },
    Complete {
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: &'static str,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(state: &mut QuizState) -> Phase {
        let ticket = state.select(0).expect("question open");
        state.advance(ticket).expect("fresh ticket")
    }

    fn question_text(view: &QuizView) -> &'static str {
        match &view.body {
            QuizBody::Question { text, .. } => *text,
            QuizBody::Complete { .. } => panic!("quiz already complete"),
        }
    }

    #[test]
    fn starts_on_first_question() {
        let state = QuizState::default();
        assert_eq!(state.phase(), Phase::AwaitingSelection(1));
        let view = state.view();
        assert_eq!(view.progress_width(), "10%");
        assert_eq!(view.progress_label, "Question 1 of 10");
        assert_eq!(question_text(&view), "What's your ideal weekend?");
    }

    #[test]
    fn first_answer_moves_to_question_two() {
        let mut state = QuizState::default();
        assert_eq!(answer(&mut state), Phase::AwaitingSelection(2));

        let view = state.view();
        assert_eq!(view.progress_width(), "20%");
        assert_eq!(view.progress_label, "Question 2 of 10");
        assert_eq!(question_text(&view), "How do you handle stress?");
    }

    #[test]
    fn selecting_keeps_exactly_one_option_marked() {
        let mut state = QuizState::default();
        for option in [2, 0, 3, 3, 1] {
            assert!(state.select(option).is_some());
            let QuizBody::Question { options, .. } = state.view().body else {
                panic!("expected a question");
            };
            let marked: Vec<usize> = options
                .iter()
                .enumerate()
                .filter(|(_, o)| o.selected)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(marked, vec![option]);
        }
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut state = QuizState::default();
        assert!(state.select(PREVIEW_OPTIONS.len()).is_none());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn advancing_clears_selection() {
        let mut state = QuizState::default();
        answer(&mut state);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn progress_label_tracks_answers() {
        let mut state = QuizState::default();
        for answered in 1..TOTAL_QUESTIONS {
            answer(&mut state);
            assert_eq!(
                state.view().progress_label,
                format!("Question {} of 10", answered + 1)
            );
        }
        answer(&mut state);
        assert_eq!(state.view().progress_label, "Quiz Complete!");
    }

    #[test]
    fn prompt_stays_put_past_the_preview_list() {
        let mut state = QuizState::default();
        for _ in 0..4 {
            answer(&mut state);
        }
        assert_eq!(state.phase(), Phase::AwaitingSelection(5));
        let last = question_text(&state.view());
        assert_eq!(last, PREVIEW_QUESTIONS[4]);

        answer(&mut state);
        answer(&mut state);
        assert_eq!(state.phase(), Phase::AwaitingSelection(7));
        assert_eq!(question_text(&state.view()), last);
    }

    #[test]
    fn last_question_completes_the_quiz() {
        let mut state = QuizState::default();
        for _ in 1..TOTAL_QUESTIONS {
            answer(&mut state);
        }
        assert_eq!(state.phase(), Phase::AwaitingSelection(10));
        assert_eq!(answer(&mut state), Phase::Completed);

        let view = state.view();
        assert_eq!(view.progress_width(), "100%");
        assert_eq!(view.progress_label, "Quiz Complete!");
        assert_eq!(
            view.body,
            QuizBody::Complete {
                message: COMPLETION_MESSAGE
            }
        );
    }

    #[test]
    fn completed_quiz_rejects_further_input() {
        let mut state = QuizState::default();
        for _ in 0..TOTAL_QUESTIONS {
            answer(&mut state);
        }
        let done = state.clone();

        assert!(state.select(0).is_none());
        assert!(!state.has_pending_advance());
        assert_eq!(state, done);
    }

    #[test]
    fn question_index_never_decreases() {
        let mut state = QuizState::default();
        let mut last = 1;
        for _ in 0..(TOTAL_QUESTIONS + 5) {
            let now = match state.select(1).and_then(|ticket| state.advance(ticket)) {
                Some(Phase::AwaitingSelection(n)) => n,
                Some(Phase::Completed) | None => TOTAL_QUESTIONS + 1,
            };
            assert!(now >= last);
            assert!(now <= TOTAL_QUESTIONS + 1);
            last = now;
        }
    }

    #[test]
    fn rapid_selections_advance_once() {
        let mut state = QuizState::default();
        let first = state.select(0).unwrap();
        let second = state.select(2).unwrap();
        assert_eq!(state.selected(), Some(2));

        // Both timers fire; only the latest ticket counts.
        assert_eq!(state.advance(first), None);
        assert_eq!(state.advance(second), Some(Phase::AwaitingSelection(2)));
        assert_eq!(state.advance(second), None);
        assert_eq!(state.advance(first), None);
        assert_eq!(state.phase(), Phase::AwaitingSelection(2));
    }

    #[test]
    fn stale_ticket_after_newer_one_lands_is_ignored() {
        let mut state = QuizState::default();
        let first = state.select(1).unwrap();
        let second = state.select(1).unwrap();
        assert_eq!(state.advance(second), Some(Phase::AwaitingSelection(2)));

        // A fresh pick on question 2 must not be consumed by the old ticket.
        let third = state.select(3).unwrap();
        assert_eq!(state.advance(first), None);
        assert_eq!(state.selected(), Some(3));
        assert_eq!(state.advance(third), Some(Phase::AwaitingSelection(3)));
    }

    #[test]
    fn restart_drops_pending_advance() {
        let mut state = QuizState::default();
        answer(&mut state);
        let ticket = state.select(0).unwrap();

        state.restart();
        assert!(!state.has_pending_advance());
        assert_eq!(state.advance(ticket), None);
        assert_eq!(state.phase(), Phase::AwaitingSelection(1));
        assert_eq!(state.view().progress_label, "Question 1 of 10");
    }

    #[test]
    fn ticket_from_before_restart_cannot_match_a_new_one() {
        let mut state = QuizState::default();
        let old = state.select(0).unwrap();
        state.restart();
        let new = state.select(0).unwrap();
        assert_ne!(old, new);
        assert_eq!(state.advance(old), None);
        assert_eq!(state.advance(new), Some(Phase::AwaitingSelection(2)));
    }

    #[test]
    fn cancelled_advance_never_lands() {
        let mut state = QuizState::default();
        let ticket = state.select(0).unwrap();
        state.cancel_pending();
        assert_eq!(state.advance(ticket), None);
        assert_eq!(state.phase(), Phase::AwaitingSelection(1));
        assert_eq!(state.selected(), Some(0));
    }
}
