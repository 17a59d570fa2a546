use scratchwin_core::{CONSOLATION_LABEL, PrizeOutcome};
use serde::{Deserialize, Serialize};

/// Every reply the endpoint can send, read from its plain-text body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerReply {
    /// The invoice was already redeemed.
    Duplicate,
    Invalid,
    Error,
    /// Consolation outcome, still scratched like a prize.
    BetterLuck,
    Prize(String),
}

impl ServerReply {
    /// Classifies a reply body.
    ///
    /// Surrounding whitespace is trimmed first; the keywords and the consolation label then
    /// match exactly and case-sensitively. An empty body reads as [`ServerReply::Error`], and
    /// any other text is taken as a prize label.
    pub fn parse(body: &str) -> Self {
        use ServerReply::*;
        let reply = match body.trim() {
            "duplicate" => Duplicate,
            "invalid" => Invalid,
            "error" | "" => Error,
            CONSOLATION_LABEL => BetterLuck,
            label => Prize(label.to_string()),
        };
        log::debug!("classified reply {:?} as {:?}", body, reply);
        reply
    }

    /// The prize to scratch, if this reply should show the card at all.
    pub fn prize(&self) -> Option<PrizeOutcome> {
        use ServerReply::*;
        match self {
            Duplicate | Invalid | Error => None,
            BetterLuck => Some(PrizeOutcome::from_label(CONSOLATION_LABEL)),
            Prize(label) => Some(PrizeOutcome::from_label(label.as_str())),
        }
    }

    pub fn notice(&self) -> Notice {
        use ServerReply::*;
        match self {
            Duplicate => Notice::new(NoticeKind::Warning, "⚠️ This invoice has already been used!"),
            Invalid => Notice::new(
                NoticeKind::Error,
                "❌ Invalid submission. Please check your details and try again.",
            ),
            Error => Notice::new(NoticeKind::Error, "❌ Server error. Please try again later."),
            BetterLuck => Notice::new(
                NoticeKind::BetterLuck,
                "😔 Oh no — better luck next time! Scratch to see.",
            ),
            Prize(_) => Notice::new(
                NoticeKind::Success,
                "🎉 Success! Scratch the card below to reveal your gift!",
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    BetterLuck,
}

impl NoticeKind {
    pub const fn class(self) -> &'static str {
        use NoticeKind::*;
        match self {
            Success => "success",
            Error => "error",
            Warning => "warning",
            BetterLuck => "better-luck",
        }
    }
}

/// Message shown above the card after validation or a reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::new(
            NoticeKind::Error,
            "❌ Something went wrong. Please check your connection and try again.",
        )
    }
}

impl From<crate::ValidationError> for Notice {
    fn from(err: crate::ValidationError) -> Self {
        Self::new(NoticeKind::Error, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_replies_hide_the_card() {
        for (body, reply, kind) in [
            ("duplicate", ServerReply::Duplicate, NoticeKind::Warning),
            ("invalid", ServerReply::Invalid, NoticeKind::Error),
            ("error", ServerReply::Error, NoticeKind::Error),
        ] {
            let parsed = ServerReply::parse(body);
            assert_eq!(parsed, reply);
            assert_eq!(parsed.prize(), None);
            assert_eq!(parsed.notice().kind, kind);
        }
    }

    #[test]
    fn empty_body_counts_as_server_error() {
        assert_eq!(ServerReply::parse(""), ServerReply::Error);
        assert_eq!(ServerReply::parse(" \n"), ServerReply::Error);
    }

    #[test]
    fn consolation_still_shows_the_card() {
        let reply = ServerReply::parse("Better luck next time\n");

        assert_eq!(reply, ServerReply::BetterLuck);
        assert_eq!(reply.notice().kind, NoticeKind::BetterLuck);
        let prize = reply.prize().unwrap();
        assert!(prize.is_consolation());
        assert_eq!(prize.glyph(), "🍀");
    }

    #[test]
    fn any_other_body_is_a_prize_label() {
        let reply = ServerReply::parse("Tiffin box");
        assert_eq!(reply, ServerReply::Prize("Tiffin box".to_string()));
        assert_eq!(reply.notice().kind, NoticeKind::Success);
        assert_eq!(reply.prize().unwrap().glyph(), "🍱");

        let unknown = ServerReply::parse("Mystery hamper").prize().unwrap();
        assert_eq!(unknown.label(), "Mystery hamper");
        assert_eq!(unknown.glyph(), "🍀");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(ServerReply::parse("  duplicate\r\n"), ServerReply::Duplicate);
        assert_eq!(
            ServerReply::parse("\tSnack box \n"),
            ServerReply::Prize("Snack box".to_string())
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            ServerReply::parse("Duplicate"),
            ServerReply::Prize("Duplicate".to_string())
        );
    }

    #[test]
    fn validation_errors_become_error_notices() {
        let notice = Notice::from(crate::ValidationError::MissingInvoice);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please enter your invoice number");
        assert_eq!(NoticeKind::BetterLuck.class(), "better-luck");
    }
}
