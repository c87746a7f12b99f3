// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::deck::Card;
use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::session::Outcome;
use crate::session::Session;
use crate::timestamp::Timestamp;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state.session.lock().unwrap();
    let now = Timestamp::now();
    let body = match session.current_card() {
        Some(card) => card_view(&session, card, now),
        None => summary_view(&session),
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn card_view(session: &Session, card: &Card, now: Timestamp) -> Markup {
    let progress = format!("{} / {}", session.position() + 1, session.deck_len());
    let remaining = session.remaining_seconds(now);
    let answered = session.current_outcome();
    let card_content = match card {
        Card::Kana { character, .. } => {
            html! {
                div.character { (character) }
            }
        }
        Card::Pronunciation {
            pronunciation,
            label,
            ..
        } => {
            html! {
                div.character { (pronunciation) }
                div.label { "(" (label) ")" }
            }
        }
        Card::Typed { character, .. } => {
            html! {
                div.character { (character) }
            }
        }
        Card::Listening { pronunciation, .. } => {
            html! {
                div.character { (pronunciation) }
            }
        }
    };
    let result = match answered {
        Some(Outcome::Correct { .. }) => html! {
            div.result.correct { "Correct!" }
            @if let Card::Listening { character, reading, .. } = card {
                div.reveal { (character) " reads " (reading) }
            }
        },
        Some(Outcome::Incorrect { given, expected }) => {
            let alternates = card.accepted();
            html! {
                div.result.incorrect {
                    "Incorrect: expected \"" (expected) "\", got \"" (given) "\""
                }
                @if !alternates.is_empty() {
                    div.reveal { "Also accepted: " (alternates.join(", ")) }
                }
                @if let Card::Listening { character, .. } = card {
                    div.reveal { "The character was " (character) }
                }
            }
        }
        _ => html! {},
    };
    let card_controls = if session.mode().accepts_answers() && answered.is_none() {
        html! {
            form action="/" method="post" {
                input type="hidden" name="action" value="Answer";
                input id="answer" type="text" name="answer" autocomplete="off" autofocus;
                input type="submit" value="Check";
            }
            form action="/" method="post" {
                input id="next" type="submit" name="action" value="Next";
            }
        }
    } else {
        html! {
            form action="/" method="post" {
                input id="next" type="submit" name="action" value="Next";
            }
        }
    };
    html! {
        div.root {
            div.card {
                div.header {
                    div.progress { (progress) }
                    @if session.mode().accepts_answers() {
                        div.progress { "Score: " (session.score()) }
                    }
                    div #timer data-remaining=(remaining) { (remaining) "s" }
                }
                div.content {
                    (card_content)
                    (result)
                }
                div.controls {
                    (card_controls)
                }
                form #expire action="/" method="post" hidden {
                    input type="hidden" name="action" value="Expire";
                }
            }
        }
    }
}

fn summary_view(session: &Session) -> Markup {
    let Some(summary) = session.summary() else {
        // Callers only render this once the deck is exhausted.
        return html! {};
    };
    let score_line = if session.mode().accepts_answers() {
        format!("Score: {} / {}", summary.score, summary.total)
    } else {
        format!("{} cards completed.", summary.total)
    };
    let missed: Vec<(&Card, &Outcome)> = summary
        .outcomes
        .into_iter()
        .filter(|(_, outcome)| !matches!(outcome, Outcome::Correct { .. }))
        .collect();
    html! {
        div.root {
            div.card.finished {
                h1 { "Session Completed" }
                div.score { (score_line) }
                @if !missed.is_empty() {
                    h2 { "Review" }
                    table.review {
                        @for (card, outcome) in missed {
                            tr {
                                td.front { (card_front(card)) }
                                td.reading { (card.reading()) }
                                td.outcome { (outcome_text(outcome)) }
                            }
                        }
                    }
                }
                div.controls {
                    form action="/" method="post" {
                        input id="restart" type="submit" name="action" value="Restart";
                    }
                }
            }
        }
    }
}

fn card_front(card: &Card) -> String {
    match card {
        Card::Kana { character, .. } => (*character).to_string(),
        Card::Pronunciation { pronunciation, .. } => (*pronunciation).to_string(),
        Card::Typed { character, .. } => (*character).to_string(),
        Card::Listening {
            pronunciation,
            character,
            ..
        } => format!("{pronunciation} ({character})"),
    }
}

fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Correct { .. } => "correct".to_string(),
        Outcome::Incorrect { given, .. } => format!("you wrote \"{given}\""),
        Outcome::Skipped => "skipped".to_string(),
        Outcome::TimedOut => "timed out".to_string(),
    }
}
