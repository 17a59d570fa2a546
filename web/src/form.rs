use scratchwin_core::PrizeOutcome;
use scratchwin_protocol::{Notice, ServerReply, Submission};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::net;
use crate::scratch::ScratchCard;
use crate::settings::CampaignSettings;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Field {
    Phone,
    Invoice,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Edit(Field, String),
    Submit,
    Replied(Result<String, String>),
}

/// Everything the form shows, independent of the component machinery.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FormState {
    submission: Submission,
    loading: bool,
    notice: Option<Notice>,
    prize: Option<PrizeOutcome>,
}

impl FormState {
    fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Phone => self.submission.phone = value,
            Field::Invoice => self.submission.invoice = value,
        }
        self.notice = None;
    }

    /// Validates and, when the form is fine, returns the body to post.
    fn begin_submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }

        if let Err(err) = self.submission.validate() {
            log::debug!("rejected submission: {}", err);
            self.notice = Some(err.into());
            return None;
        }

        self.loading = true;
        self.notice = None;
        self.prize = None;
        Some(self.submission.form_body())
    }

    fn finish_submit(&mut self, reply: Result<String, String>) {
        self.loading = false;
        match reply {
            Ok(body) => {
                let reply = ServerReply::parse(&body);
                self.notice = Some(reply.notice());
                self.prize = reply.prize();
            }
            Err(err) => {
                log::error!("submission failed: {}", err);
                self.notice = Some(Notice::transport_failure());
                self.prize = None;
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct ScratchWin {
    state: FormState,
}

impl Component for ScratchWin {
    type Message = Msg;
    type Properties = CampaignSettings;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Edit(field, value) => {
                self.state.edit(field, value);
                true
            }
            Submit => {
                let Some(body) = self.state.begin_submit() else {
                    return true;
                };
                let endpoint = ctx.props().endpoint.clone();
                log::debug!("posting submission to {}", endpoint);
                ctx.link().send_future(async move {
                    let reply = net::post_form(&endpoint, &body)
                        .await
                        .map_err(|err| format!("{:?}", err));
                    Replied(reply)
                });
                true
            }
            Replied(reply) => {
                self.state.finish_submit(reply);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let FormState {
            submission,
            loading,
            notice,
            prize,
        } = &self.state;
        let loading = *loading;

        let oninput = |field: Field| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(field.clone(), input.value())
            })
        };
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(Msg::Submit)
        });
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Submit);

        html! {
            <main class="scratchwin">
                <article>
                    <header>
                        <h2>{"🎁 Scratch & Win Offer"}</h2>
                        <p>{"Enter your details to claim your prize!"}</p>
                    </header>
                    <input
                        type="tel"
                        placeholder="Phone number"
                        value={submission.phone.clone()}
                        oninput={oninput(Field::Phone)}
                        onkeydown={onkeydown.clone()}
                        disabled={loading}
                    />
                    <input
                        type="text"
                        placeholder="Invoice number"
                        value={submission.invoice.clone()}
                        oninput={oninput(Field::Invoice)}
                        {onkeydown}
                        disabled={loading}
                    />
                    <button {onclick} disabled={loading} aria-busy={loading.to_string()}>
                        { if loading { "Submitting..." } else { "Submit" } }
                    </button>
                    if let Some(notice) = notice {
                        <p role="alert" class={classes!("notice", notice.kind.class())}>
                            {notice.text.clone()}
                        </p>
                    }
                    if let Some(prize) = prize {
                        <ScratchCard prize={prize.clone()} config={ctx.props().reveal_config()}/>
                    }
                </article>
            </main>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratchwin_protocol::NoticeKind;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.edit(Field::Phone, "98765 43210".to_string());
        state.edit(Field::Invoice, "INV-42".to_string());
        state
    }

    #[test]
    fn invalid_form_shows_notice_without_posting() {
        let mut state = FormState::default();
        state.edit(Field::Phone, "123".to_string());
        state.edit(Field::Invoice, "INV-42".to_string());

        assert_eq!(state.begin_submit(), None);
        assert!(!state.loading);
        assert_eq!(
            state.notice,
            Some(Notice::new(
                NoticeKind::Error,
                "Please enter a valid phone number"
            ))
        );
    }

    #[test]
    fn editing_clears_the_notice() {
        let mut state = FormState::default();
        assert_eq!(state.begin_submit(), None);
        assert!(state.notice.is_some());

        state.edit(Field::Phone, "9".to_string());

        assert_eq!(state.notice, None);
    }

    #[test]
    fn submit_hides_previous_prize_and_blocks_resubmission() {
        let mut state = filled();
        state.prize = Some(PrizeOutcome::from_label("Jug"));

        assert_eq!(
            state.begin_submit().as_deref(),
            Some("phone=98765%2043210&invoice=INV-42")
        );
        assert!(state.loading);
        assert_eq!(state.prize, None);
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn prize_reply_shows_the_card() {
        let mut state = filled();
        state.begin_submit();

        state.finish_submit(Ok("Snack box".to_string()));

        assert!(!state.loading);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
        assert_eq!(state.prize, Some(PrizeOutcome::from_label("Snack box")));
    }

    #[test]
    fn duplicate_reply_warns_without_card() {
        let mut state = filled();
        state.begin_submit();

        state.finish_submit(Ok("duplicate".to_string()));

        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));
        assert_eq!(state.prize, None);
    }

    #[test]
    fn transport_failure_reports_connection_problem() {
        let mut state = filled();
        state.begin_submit();

        state.finish_submit(Err("TypeError: Failed to fetch".to_string()));

        assert!(!state.loading);
        assert_eq!(state.notice, Some(Notice::transport_failure()));
        assert_eq!(state.prize, None);
    }
}
