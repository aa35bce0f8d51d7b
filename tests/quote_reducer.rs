use inspirex::quote::{FallbackCatalog, Quote, FALLBACK_ADVISORY};
use inspirex::ui::mvi::Reducer;
use inspirex::ui::quote::{QuoteIntent, QuoteReducer, QuoteState};

fn fold(intents: Vec<QuoteIntent>) -> QuoteState {
    intents
        .into_iter()
        .fold(QuoteState::default(), QuoteReducer::reduce)
}

fn quote(text: &str, author: &str) -> Quote {
    Quote::new(text, Some(author)).unwrap()
}

#[test]
fn successful_chain_settles_without_error() {
    let state = fold(vec![
        QuoteIntent::Started,
        QuoteIntent::Resolved {
            quote: quote("X", "Y"),
        },
    ]);

    assert_eq!(
        state,
        QuoteState {
            quote: Some(quote("X", "Y")),
            ..QuoteState::default()
        }
    );
}

#[test]
fn retried_chain_stays_loading_until_resolved() {
    let mut state = QuoteState::default();
    for intent in [
        QuoteIntent::Started,
        QuoteIntent::Retrying {
            attempt: 1,
            error: "HTTP 500".into(),
        },
        QuoteIntent::AnimationTick,
        QuoteIntent::Retrying {
            attempt: 2,
            error: "Request timed out after 7000 ms".into(),
        },
    ] {
        state = QuoteReducer::reduce(state, intent);
        assert!(state.loading);
        assert!(state.error.is_none());
    }
    assert_eq!(state.retry_attempt, 2);

    let fallback = FallbackCatalog::builtin().iter().last().unwrap();
    state = QuoteReducer::reduce(
        state,
        QuoteIntent::FellBack {
            quote: fallback.clone(),
            advisory: FALLBACK_ADVISORY.into(),
        },
    );

    assert!(!state.loading);
    assert_eq!(state.quote, Some(fallback));
    assert_eq!(state.error.as_deref(), Some(FALLBACK_ADVISORY));
    assert_eq!(state.retry_attempt, 0);
}

#[test]
fn new_chain_after_fallback_clears_advisory() {
    let state = fold(vec![
        QuoteIntent::Started,
        QuoteIntent::FellBack {
            quote: quote("local", "Catalog"),
            advisory: FALLBACK_ADVISORY.into(),
        },
        QuoteIntent::Started,
    ]);

    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(!state.is_displayable());
}

#[test]
fn settled_state_always_has_full_quote() {
    let chains = vec![
        vec![
            QuoteIntent::Started,
            QuoteIntent::Resolved {
                quote: quote("X", "Y"),
            },
        ],
        vec![
            QuoteIntent::Started,
            QuoteIntent::FellBack {
                quote: quote("local", "Catalog"),
                advisory: FALLBACK_ADVISORY.into(),
            },
        ],
    ];

    for chain in chains {
        let state = fold(chain);
        assert!(state.is_displayable());
        let shown = state.quote.unwrap();
        assert!(!shown.text().is_empty());
        assert!(!shown.author().is_empty());
    }
}
