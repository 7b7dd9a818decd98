use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::quiz::{AdvanceTicket, Phase, QuizBody, QuizState};

#[derive(Properties, PartialEq)]
pub struct QuizPreviewProps {
    pub advance_delay_ms: u32,
}

pub enum QuizPreviewMsg {
    Select(usize),
    Advance(AdvanceTicket),
    Restart,
}

/// Interactive quiz teaser. Nothing is scored or sent anywhere; picking an
/// option just moves the card to the next question after a short pause.
pub struct QuizPreview {
    state: QuizState,
    // Timer for the state's pending advance. Dropping it cancels the tick;
    // a tick that still slips through carries a stale ticket.
    timer: Option<Timeout>,
}

impl Component for QuizPreview {
    type Message = QuizPreviewMsg;
    type Properties = QuizPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: QuizState::default(),
            timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizPreviewMsg::Select(option) => {
                let Some(ticket) = self.state.select(option) else {
                    return false;
                };
                // A newer pick restarts the delay instead of queueing a
                // second advance.
                let link = ctx.link().clone();
                self.timer = Some(Timeout::new(ctx.props().advance_delay_ms, move || {
                    link.send_message(QuizPreviewMsg::Advance(ticket));
                }));
                true
            }
            QuizPreviewMsg::Advance(ticket) => {
                let Some(phase) = self.state.advance(ticket) else {
                    debug!("Dropping stale quiz advance");
                    return false;
                };
                self.timer = None;
                match phase {
                    Phase::AwaitingSelection(n) => debug!("Quiz preview on question {}", n),
                    Phase::Completed => debug!("Quiz preview complete"),
                }
                true
            }
            QuizPreviewMsg::Restart => {
                self.timer = None;
                self.state.restart();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.state.view();
        let width = view.progress_width();

        let body = match view.body {
            QuizBody::Question { text, options } => html! {
                <>
                    <h3 class="quiz-question">{text}</h3>
                    <div class="quiz-options">
                        { for options.into_iter().enumerate().map(|(i, option)| {
                            let onclick = ctx.link().callback(move |_: MouseEvent| QuizPreviewMsg::Select(i));
                            html! {
                                <button
                                    class={classes!("quiz-option", option.selected.then(|| "selected"))}
                                    {onclick}
                                >
                                    {option.label}
                                </button>
                            }
                        }) }
                    </div>
                </>
            },
            QuizBody::Complete { message } => html! {
                <div class="quiz-complete">
                    <h3 class="quiz-question">{message}</h3>
                    <button
                        class="quiz-restart"
                        onclick={ctx.link().callback(|_: MouseEvent| QuizPreviewMsg::Restart)}
                    >
                        {"Try again"}
                    </button>
                </div>
            },
        };

        html! {
            <div class="quiz-card">
                <div class="quiz-progress">
                    <div class="progress-bar">
                        <div class="progress-fill" style={format!("width: {};", width)}></div>
                    </div>
                    <span class="progress-text">{view.progress_label}</span>
                </div>
                {body}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.cancel_pending();
        self.timer = None;
    }
}
